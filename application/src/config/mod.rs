//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`OrchestratorConfig`]: baseline models and ensemble configs of a batch
//! - [`GenerationOptions`]: sampling options and per-call timeout
//! - [`EvaluatorConfig`]: evaluator model and sampling
//! - [`ExperimentPreset`] / [`ResultPaths`]: batch sizes and file names

pub mod evaluator;
pub mod generation;
pub mod orchestrator;
pub mod paths;
pub mod preset;

pub use evaluator::{DEFAULT_EVALUATOR_MODEL, EvaluatorConfig};
pub use generation::GenerationOptions;
pub use orchestrator::OrchestratorConfig;
pub use paths::ResultPaths;
pub use preset::ExperimentPreset;
