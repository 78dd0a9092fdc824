//! Sampling configuration from TOML (`[generation]` section)

use serde::{Deserialize, Serialize};

/// Raw sampling options sent with every generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Maximum tokens per response (Ollama `num_predict`)
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: 200,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}
