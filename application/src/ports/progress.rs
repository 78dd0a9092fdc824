//! Progress notification port
//!
//! Defines the interface for reporting progress during experiment runs and
//! evaluations.

use debate_domain::UnitKind;
use std::path::Path;

/// Callback for progress updates during a batch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once before any unit runs
    fn on_suite_start(&self, _total_units: usize, _scenarios: usize) {}

    /// Called when a baseline model or ensemble config starts its scenarios
    fn on_unit_start(&self, kind: UnitKind, unit: &str, total_scenarios: usize);

    /// Called after each scenario; `success` is false for skipped scenarios
    fn on_scenario_complete(&self, kind: UnitKind, unit: &str, scenario_index: usize, success: bool);

    /// Called when a unit has run every scenario
    fn on_unit_complete(&self, kind: UnitKind, unit: &str);

    /// Called after each write of the batch file
    fn on_batch_saved(&self, _path: &Path) {}

    // ==================== Evaluation Callbacks ====================

    fn on_evaluation_start(&self, _total_debates: usize) {}

    fn on_debate_evaluated(&self, _kind: UnitKind, _unit: &str, _failed_axes: usize) {}

    fn on_evaluation_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_unit_start(&self, _kind: UnitKind, _unit: &str, _total_scenarios: usize) {}
    fn on_scenario_complete(
        &self,
        _kind: UnitKind,
        _unit: &str,
        _scenario_index: usize,
        _success: bool,
    ) {
    }
    fn on_unit_complete(&self, _kind: UnitKind, _unit: &str) {}
}
