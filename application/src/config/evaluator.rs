//! Evaluator configuration.

use debate_domain::ModelId;

pub const DEFAULT_EVALUATOR_MODEL: &str = "deepseek-r1:14b";

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorConfig {
    /// Model issuing the five scoring calls
    pub evaluator_model: ModelId,
    /// Evaluate at most this many debates per group
    pub sample: Option<usize>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            evaluator_model: DEFAULT_EVALUATOR_MODEL.into(),
            sample: None,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_evaluator_model(mut self, model: ModelId) -> Self {
        self.evaluator_model = model;
        self
    }

    pub fn with_sample(mut self, sample: Option<usize>) -> Self {
        self.sample = sample;
        self
    }
}
