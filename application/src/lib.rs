//! Application layer for ensemble-debates
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{
    DEFAULT_EVALUATOR_MODEL, EvaluatorConfig, ExperimentPreset, GenerationOptions,
    OrchestratorConfig, ResultPaths,
};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    experiment_store::{ExperimentStore, StoreError},
    model_gateway::{GatewayError, GenerationRequest, ModelGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::evaluate_debates::{EvaluateDebatesUseCase, EvaluateError};
pub use use_cases::run_debate::{DebateError, RunDebateUseCase};
pub use use_cases::run_experiment::{RunExperimentError, RunExperimentUseCase};
