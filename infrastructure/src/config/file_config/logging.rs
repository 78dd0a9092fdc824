//! Log output configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write a JSONL transcript of every model call
    pub transcript: bool,
    /// Write `experiments_{timestamp}.log` into the results directory
    pub log_file: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            transcript: false,
            log_file: true,
        }
    }
}
