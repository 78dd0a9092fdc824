//! Ollama endpoint configuration from TOML (`[ollama]` section)

use crate::ollama::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Raw Ollama endpoint configuration
///
/// ```toml
/// [ollama]
/// base_url = "http://localhost:11434"
/// timeout_seconds = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    pub base_url: String,
    /// Bound on a single generation call
    pub timeout_seconds: u64,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 60,
        }
    }
}
