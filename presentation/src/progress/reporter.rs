//! Progress reporting for experiment batches and evaluations

use colored::Colorize;
use debate_application::ProgressNotifier;
use debate_domain::UnitKind;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Mutex;

/// Progress bars: one for the whole suite, one for the running unit
pub struct ProgressReporter {
    multi: MultiProgress,
    suite_bar: Mutex<Option<ProgressBar>>,
    unit_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            suite_bar: Mutex::new(None),
            unit_bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn add_bar(&self, len: usize, prefix: String) -> ProgressBar {
        let pb = self.multi.add(ProgressBar::new(len as u64));
        pb.set_style(Self::bar_style());
        pb.set_prefix(prefix);
        pb
    }

    fn with_bar(slot: &Mutex<Option<ProgressBar>>, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = slot.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }

    fn set_bar(slot: &Mutex<Option<ProgressBar>>, pb: Option<ProgressBar>) -> Option<ProgressBar> {
        slot.lock().ok().and_then(|mut guard| std::mem::replace(&mut *guard, pb))
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn unit_label(kind: UnitKind, unit: &str) -> String {
    format!("{} {}", kind, unit)
}

impl ProgressNotifier for ProgressReporter {
    fn on_suite_start(&self, total_units: usize, _scenarios: usize) {
        let pb = self.add_bar(total_units, "Units".to_string());
        pb.set_message("Starting...");
        Self::set_bar(&self.suite_bar, Some(pb));
    }

    fn on_unit_start(&self, kind: UnitKind, unit: &str, total_scenarios: usize) {
        let pb = self.add_bar(total_scenarios, unit_label(kind, unit));
        Self::with_bar(&self.suite_bar, |suite| suite.set_message(unit.to_string()));
        Self::set_bar(&self.unit_bar, Some(pb));
    }

    fn on_scenario_complete(&self, _kind: UnitKind, _unit: &str, scenario_index: usize, success: bool) {
        Self::with_bar(&self.unit_bar, |pb| {
            let status = if success {
                format!("{} scenario {}", "v".green(), scenario_index + 1)
            } else {
                format!("{} scenario {} skipped", "x".red(), scenario_index + 1)
            };
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_unit_complete(&self, _kind: UnitKind, unit: &str) {
        if let Some(pb) = Self::set_bar(&self.unit_bar, None) {
            pb.finish_with_message(format!("{}", "done".green()));
        }
        Self::with_bar(&self.suite_bar, |suite| {
            suite.set_message(format!("{} saved", unit));
            suite.inc(1);
        });
    }

    fn on_batch_saved(&self, path: &Path) {
        Self::with_bar(&self.suite_bar, |suite| {
            if suite.position() >= suite.length().unwrap_or(0) {
                suite.finish_with_message(format!("saved {}", path.display()));
            }
        });
    }

    fn on_evaluation_start(&self, total_debates: usize) {
        let pb = self.add_bar(total_debates, "Evaluating".to_string());
        Self::set_bar(&self.unit_bar, Some(pb));
    }

    fn on_debate_evaluated(&self, kind: UnitKind, unit: &str, failed_axes: usize) {
        Self::with_bar(&self.unit_bar, |pb| {
            let label = unit_label(kind, unit);
            if failed_axes == 0 {
                pb.set_message(label);
            } else {
                pb.set_message(format!("{} ({} axes neutral)", label, failed_axes).yellow().to_string());
            }
            pb.inc(1);
        });
    }

    fn on_evaluation_complete(&self) {
        if let Some(pb) = Self::set_bar(&self.unit_bar, None) {
            pb.finish_with_message(format!("{}", "Evaluation complete!".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_suite_start(&self, total_units: usize, scenarios: usize) {
        println!(
            "{} {} ({} units x {} scenarios)",
            "->".cyan(),
            "Experiment suite".bold(),
            total_units,
            scenarios
        );
    }

    fn on_unit_start(&self, kind: UnitKind, unit: &str, total_scenarios: usize) {
        println!(
            "{} {} ({} scenarios)",
            "->".cyan(),
            unit_label(kind, unit).bold(),
            total_scenarios
        );
    }

    fn on_scenario_complete(&self, _kind: UnitKind, _unit: &str, scenario_index: usize, success: bool) {
        if success {
            println!("  {} scenario {}", "v".green(), scenario_index + 1);
        } else {
            println!("  {} scenario {} (skipped)", "x".red(), scenario_index + 1);
        }
    }

    fn on_unit_complete(&self, _kind: UnitKind, _unit: &str) {
        println!();
    }

    fn on_batch_saved(&self, path: &Path) {
        println!("  {} {}", "saved".dimmed(), path.display());
    }

    fn on_evaluation_start(&self, total_debates: usize) {
        println!("{} {} ({} debates)", "->".cyan(), "Evaluation".bold(), total_debates);
    }

    fn on_debate_evaluated(&self, kind: UnitKind, unit: &str, failed_axes: usize) {
        if failed_axes == 0 {
            println!("  {} {}", "v".green(), unit_label(kind, unit));
        } else {
            println!(
                "  {} {} ({} axes neutral)",
                "!".yellow(),
                unit_label(kind, unit),
                failed_axes
            );
        }
    }

    fn on_evaluation_complete(&self) {
        println!();
    }
}
