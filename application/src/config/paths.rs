//! Result file naming.

use super::preset::ExperimentPreset;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

const FILE_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

/// Locations of batch, evaluation and log files under one results directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPaths {
    results_dir: PathBuf,
}

impl ResultPaths {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// `experiment_results_{ts}_incremental.json`
    pub fn incremental(&self, at: DateTime<Local>) -> PathBuf {
        self.results_dir.join(format!(
            "experiment_results_{}_incremental.json",
            at.format(FILE_TIMESTAMP)
        ))
    }

    /// `{stem}_results.json` for a finished preset run
    pub fn final_results(&self, preset: ExperimentPreset) -> PathBuf {
        self.results_dir
            .join(format!("{}_results.json", preset.result_stem()))
    }

    /// `resumed_experiment_results_{ts}.json`
    pub fn resumed(&self, at: DateTime<Local>) -> PathBuf {
        self.results_dir.join(format!(
            "resumed_experiment_results_{}.json",
            at.format(FILE_TIMESTAMP)
        ))
    }

    /// `experiments_{ts}.log`
    pub fn log_file_name(at: DateTime<Local>) -> String {
        format!("experiments_{}.log", at.format(FILE_TIMESTAMP))
    }

    /// `conversation_{ts}.jsonl`
    pub fn transcript(&self, at: DateTime<Local>) -> PathBuf {
        self.results_dir
            .join(format!("conversation_{}.jsonl", at.format(FILE_TIMESTAMP)))
    }

    /// `{stem}_evaluation.json` beside the source file
    pub fn evaluation_for(source: &Path) -> PathBuf {
        sibling(source, "_evaluation.json")
    }

    /// `{stem}_evaluation_report.md` beside the source file
    pub fn report_for(source: &Path) -> PathBuf {
        sibling(source, "_evaluation_report.md")
    }
}

fn sibling(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "results".to_string());
    source.with_file_name(format!("{}{}", stem, suffix))
}
