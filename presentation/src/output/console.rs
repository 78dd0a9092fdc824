//! Console output formatter for batches, debates and evaluations

use colored::Colorize;
use debate_domain::{
    BatchProgress, DebateResult, EvaluationDocument, ExperimentBatch, ExperimentSummary, ModelId,
    OVERALL_SCORE, Scenario,
};
use std::path::Path;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Summary printed after a batch finishes
    pub fn format_summary(title: &str, summary: &ExperimentSummary, path: &Path) -> String {
        let stats = &summary.summary_stats;
        let mut output = String::new();

        output.push_str(&Self::header(title));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Total baseline debates:".cyan().bold(),
            stats.total_baseline_debates
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Total ensemble debates:".cyan().bold(),
            stats.total_ensemble_debates
        ));
        output.push_str(&format!(
            "{} {:.2}s\n",
            "Avg baseline time:".cyan().bold(),
            stats.baseline_avg_time
        ));
        output.push_str(&format!(
            "{} {:.2}s\n",
            "Avg ensemble time:".cyan().bold(),
            stats.ensemble_avg_time
        ));
        if stats.skipped_scenarios > 0 {
            output.push_str(&format!(
                "{} {}\n",
                "Skipped scenarios:".yellow().bold(),
                stats.skipped_scenarios
            ));
        }

        if !summary.performance_comparison.is_empty() {
            output.push_str(&Self::section_header("Verdicts by unit"));
            for (unit, perf) in &summary.performance_comparison {
                let unknown = summary.unknown_verdicts.get(unit).copied().unwrap_or(0);
                output.push_str(&format!(
                    "  {:<36} proponent {:>3}  opponent {:>3}  unknown {:>3}  avg {:.1}s\n",
                    unit, perf.proponent_wins, perf.opponent_wins, unknown, perf.avg_time
                ));
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Results saved to:".dimmed(),
            path.display()
        ));
        output.push_str(&Self::footer());
        output
    }

    /// Completed and remaining units of a batch file
    pub fn format_status(path: &Path, batch: &ExperimentBatch, progress: &BatchProgress) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Experiment Status"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "File:".cyan().bold(), path.display()));
        output.push_str(&format!(
            "{} {}  {} {}  {} {}\n",
            "Started:".cyan().bold(),
            batch.metadata.timestamp,
            "Scenarios:".cyan().bold(),
            batch.scenarios_tested.len(),
            "Rounds:".cyan().bold(),
            batch.metadata.rounds
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Debates recorded:".cyan().bold(),
            progress.debates_recorded
        ));

        output.push_str(&Self::section_header("Baselines"));
        for unit in &progress.completed_baselines {
            output.push_str(&Self::done_line(unit, batch.baseline_results.get(unit).map(Vec::len)));
        }
        for model in &progress.remaining_baselines {
            output.push_str(&format!("  {} {}\n", "-".yellow(), model));
        }

        output.push_str(&Self::section_header("Ensembles"));
        for unit in &progress.completed_ensembles {
            output.push_str(&Self::done_line(unit, batch.ensemble_results.get(unit).map(Vec::len)));
        }
        for config in &progress.remaining_ensembles {
            output.push_str(&format!(
                "  {} {} ({})\n",
                "-".yellow(),
                config.name,
                config.assignment
            ));
        }

        if !batch.skipped.is_empty() {
            output.push_str(&Self::section_header("Skipped scenarios"));
            for skipped in &batch.skipped {
                output.push_str(&format!(
                    "  {} {} {} #{} {}: {}\n",
                    "x".red(),
                    skipped.kind,
                    skipped.unit,
                    skipped.scenario_index,
                    skipped.topic,
                    skipped.reason
                ));
            }
        }

        let state = if progress.is_complete() {
            "Complete".green().bold()
        } else {
            format!("{} units remaining", progress.remaining_units()).yellow().bold()
        };
        output.push_str(&format!("\n{}\n", state));
        output.push_str(&Self::footer());
        output
    }

    fn done_line(unit: &str, debates: Option<usize>) -> String {
        format!("  {} {} ({} debates)\n", "v".green(), unit, debates.unwrap_or(0))
    }

    /// Full transcript of one debate
    pub fn format_debate(label: &str, result: &DebateResult) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header(label));
        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), result.topic));
        for argument in &result.arguments {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!(
                    "── {} (round {}, {}) ──",
                    argument.role.display_name(),
                    argument.round_number,
                    argument.model
                )
                .yellow()
                .bold(),
                Self::indent(argument.content.trim(), "  ")
            ));
        }
        output.push_str(&format!(
            "\n{} {}  {} {:.1}s  {} {}\n",
            "Winner:".green().bold(),
            result.winner,
            "Time:".dimmed(),
            result.total_time,
            "Ensemble:".dimmed(),
            result.ensemble_used
        ));
        output
    }

    pub fn format_scenarios(scenarios: &[Scenario]) -> String {
        let mut output = String::new();
        let mut current: Option<&str> = None;
        for scenario in scenarios {
            if current != Some(scenario.category.as_str()) {
                output.push_str(&Self::section_header(&scenario.category));
                current = Some(scenario.category.as_str());
            }
            output.push_str(&format!("  * {}\n", scenario.topic.bold()));
            if !scenario.alignment_focus.is_empty() {
                output.push_str(&format!("    {}\n", scenario.alignment_focus.dimmed()));
            }
        }
        output.push_str(&format!("\n{} scenarios\n", scenarios.len()));
        output
    }

    /// Installed vs missing configured models
    pub fn format_models(configured: &[ModelId], available: &[ModelId]) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Configured models"));
        let mut missing = 0;
        for model in configured {
            if available.contains(model) {
                output.push_str(&format!("  {} {}\n", "v".green(), model));
            } else {
                missing += 1;
                output.push_str(&format!("  {} {} (not installed)\n", "x".red(), model));
            }
        }
        if missing > 0 {
            output.push_str(&format!(
                "\n{} missing; install with `ollama pull <model>`\n",
                missing.to_string().yellow().bold()
            ));
        }
        output
    }

    /// Headline comparison printed after an evaluation
    pub fn format_evaluation(document: &EvaluationDocument, output_path: &Path, report_path: &Path) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("EVALUATION COMPLETE"));
        output.push('\n');
        output.push_str(&format!(
            "{} {} baseline, {} ensemble\n",
            "Debates evaluated:".cyan().bold(),
            document.baseline_evaluations.len(),
            document.ensemble_evaluations.len()
        ));
        for (name, data) in &document.comparison_statistics.metrics {
            let line = format!(
                "  {:<22} {:>5.2} -> {:>5.2}  ({:+.2})",
                name, data.baseline_mean, data.ensemble_mean, data.improvement
            );
            if name == OVERALL_SCORE {
                output.push_str(&format!("{}\n", line.bold()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }
        output.push_str(&format!(
            "\n{} {}\n{} {}\n",
            "Evaluation data saved:".dimmed(),
            output_path.display(),
            "Report:".dimmed(),
            report_path.display()
        ));
        output.push_str(&Self::footer());
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::{EnsembleConfig, RoleAssignment, analyze_results};
    use debate_domain::BatchMetadata;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_status_lists_remaining_units() {
        plain();
        let mut batch = ExperimentBatch::new(
            BatchMetadata::new(0, 2, &[], &[]),
            Vec::new(),
        );
        batch.record_unit(debate_domain::UnitKind::Baseline, "m1", Vec::new(), Vec::new());
        let ensembles = vec![EnsembleConfig::new(
            "duo",
            RoleAssignment::new("a".into(), "b".into(), "c".into()),
        )];
        let progress = batch.progress(&["m1".into(), "m2".into()], &ensembles);

        let text = ConsoleFormatter::format_status(Path::new("x.json"), &batch, &progress);
        assert!(text.contains("v m1 (0 debates)"));
        assert!(text.contains("- m2"));
        assert!(text.contains("- duo (proponent=a, opponent=b, judge=c)"));
        assert!(text.contains("2 units remaining"));
    }

    #[test]
    fn test_summary_mentions_path() {
        plain();
        let batch = ExperimentBatch::new(BatchMetadata::new(0, 1, &[], &[]), Vec::new());
        let text = ConsoleFormatter::format_summary(
            "QUICK TEST RESULTS",
            &analyze_results(&batch),
            Path::new("results/quick.json"),
        );
        assert!(text.contains("Total baseline debates: 0"));
        assert!(text.contains("Results saved to: results/quick.json"));
        assert!(!text.contains("Skipped"));
    }

    #[test]
    fn test_models_flags_missing() {
        plain();
        let text = ConsoleFormatter::format_models(
            &["phi3:3.8b".into(), "mistral:7b".into()],
            &["phi3:3.8b".into()],
        );
        assert!(text.contains("v phi3:3.8b"));
        assert!(text.contains("x mistral:7b (not installed)"));
        assert!(text.contains("1 missing"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
