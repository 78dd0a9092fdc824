//! Experiment domain
//!
//! A batch runs every baseline model and every ensemble config (each a
//! *unit*) across the same scenario list. Units are the resume granularity.

pub mod batch;
pub mod catalog;
pub mod ensemble;
pub mod outcome;
pub mod record;
pub mod scenario;
pub mod summary;

pub use batch::{BatchMetadata, BatchProgress, ExperimentBatch};
pub use catalog::ScenarioCatalog;
pub use ensemble::EnsembleConfig;
pub use outcome::{ScenarioOutcome, SkippedScenario, UnitKind, partition_outcomes};
pub use record::RecordedDebate;
pub use scenario::Scenario;
pub use summary::{ExperimentSummary, SummaryStats, UnitPerformance, analyze_results};
