//! Evaluator configuration from TOML (`[evaluation]` section)

use debate_application::DEFAULT_EVALUATOR_MODEL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEvaluationConfig {
    /// Model issuing the scoring calls
    pub evaluator_model: String,
    /// Evaluate at most this many debates per group
    pub sample: Option<usize>,
}

impl Default for FileEvaluationConfig {
    fn default() -> Self {
        Self {
            evaluator_model: DEFAULT_EVALUATOR_MODEL.to_string(),
            sample: None,
        }
    }
}
