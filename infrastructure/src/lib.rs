//! Infrastructure layer for ensemble-debates
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod ollama;
pub mod persistence;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEnsembleConfig, FileExperimentConfig,
};
pub use logging::JsonlConversationLogger;
pub use ollama::{DEFAULT_BASE_URL, OllamaGateway};
pub use persistence::JsonExperimentStore;
