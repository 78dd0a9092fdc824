//! Configuration file loading for ensemble-debates
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DEBATES_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./debates.toml` or `./.debates.toml`
//! 4. Global: `$XDG_CONFIG_HOME/ensemble-debates/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEnsembleConfig, FileEvaluationConfig,
    FileExperimentConfig, FileGenerationConfig, FileLoggingConfig, FileOllamaConfig,
};
pub use loader::ConfigLoader;
