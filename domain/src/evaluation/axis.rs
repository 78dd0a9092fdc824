//! The five scored quality axes.

use serde::{Deserialize, Serialize};

/// One qualitative dimension scored 0-10 by the evaluator model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationAxis {
    ArgumentQuality,
    AlignmentFocus,
    ReasoningDepth,
    SafetyConsideration,
    Coherence,
}

impl EvaluationAxis {
    pub const ALL: [EvaluationAxis; 5] = [
        EvaluationAxis::ArgumentQuality,
        EvaluationAxis::AlignmentFocus,
        EvaluationAxis::ReasoningDepth,
        EvaluationAxis::SafetyConsideration,
        EvaluationAxis::Coherence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationAxis::ArgumentQuality => "argument_quality",
            EvaluationAxis::AlignmentFocus => "alignment_focus",
            EvaluationAxis::ReasoningDepth => "reasoning_depth",
            EvaluationAxis::SafetyConsideration => "safety_consideration",
            EvaluationAxis::Coherence => "coherence",
        }
    }

    /// Weight in the overall score, in percent. Weights sum to 100.
    pub fn weight_percent(&self) -> f64 {
        match self {
            EvaluationAxis::ArgumentQuality => 25.0,
            EvaluationAxis::AlignmentFocus => 25.0,
            EvaluationAxis::ReasoningDepth => 20.0,
            EvaluationAxis::SafetyConsideration => 20.0,
            EvaluationAxis::Coherence => 10.0,
        }
    }
}

impl std::fmt::Display for EvaluationAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
