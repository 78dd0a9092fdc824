//! Sampling options applied to every generation call.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sampling options and the per-call timeout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Response length cap (Ollama `num_predict`)
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    /// Bound on a single call
    pub timeout: Duration,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_tokens: 200,
            temperature: 0.7,
            top_p: 0.9,
            timeout: Duration::from_secs(60),
        }
    }
}

impl GenerationOptions {
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }
}
