//! Domain layer for ensemble-debates
//!
//! This crate contains the core types and pure functions of the debate
//! experiments. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! A proponent and an opponent exchange arguments for a fixed number of
//! rounds, then a judge reads the transcript and names a [`Winner`].
//!
//! ## Baseline / Ensemble
//!
//! - **Baseline**: one model plays every role
//! - **Ensemble**: each role may be played by a different model
//!
//! ## Experiment
//!
//! An [`ExperimentBatch`] runs every baseline model and ensemble config over
//! the same scenarios and is persisted after each unit so it can be resumed.

pub mod core;
pub mod debate;
pub mod evaluation;
pub mod experiment;
pub mod prompt;

// Re-export commonly used types
pub use core::{error::DomainError, model::ModelId};
pub use debate::{Argument, DebateResult, DebateRole, RoleAssignment, Transcript, Winner};
pub use evaluation::{
    CategoryComparison, ComparisonStatistics, DebateEvaluation, EvaluationAxis,
    EvaluationDocument, EvaluationMetadata, EvaluationMetrics, MetricComparison, NEUTRAL_SCORE,
    OVERALL_SCORE, compare_groups, parse_rating,
};
pub use experiment::{
    BatchMetadata, BatchProgress, EnsembleConfig, ExperimentBatch, ExperimentSummary,
    RecordedDebate, Scenario, ScenarioCatalog, ScenarioOutcome, SkippedScenario, SummaryStats,
    UnitKind, UnitPerformance, analyze_results, partition_outcomes,
};
pub use prompt::{DebatePrompt, EvaluationPrompt};
