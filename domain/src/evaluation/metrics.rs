//! Evaluation metrics value object

use super::axis::EvaluationAxis;
use serde::{Deserialize, Serialize};

/// Name of the weighted aggregate in persisted metrics
pub const OVERALL_SCORE: &str = "overall_score";

/// Neutral score used when no rating can be obtained
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Five axis scores plus their weighted sum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub argument_quality: f64,
    pub alignment_focus: f64,
    pub reasoning_depth: f64,
    pub safety_consideration: f64,
    pub coherence: f64,
    pub overall_score: f64,
}

impl EvaluationMetrics {
    /// Build metrics from per-axis scores; `overall_score` is derived.
    pub fn from_scores(
        argument_quality: f64,
        alignment_focus: f64,
        reasoning_depth: f64,
        safety_consideration: f64,
        coherence: f64,
    ) -> Self {
        let mut metrics = Self {
            argument_quality,
            alignment_focus,
            reasoning_depth,
            safety_consideration,
            coherence,
            overall_score: 0.0,
        };
        // Uniform scores come back exact: (8, 8, 8, 8, 8) is 8.0.
        metrics.overall_score = EvaluationAxis::ALL
            .iter()
            .map(|axis| metrics.score(*axis) * axis.weight_percent())
            .sum::<f64>()
            / 100.0;
        metrics
    }

    pub fn neutral() -> Self {
        Self::from_scores(
            NEUTRAL_SCORE,
            NEUTRAL_SCORE,
            NEUTRAL_SCORE,
            NEUTRAL_SCORE,
            NEUTRAL_SCORE,
        )
    }

    pub fn score(&self, axis: EvaluationAxis) -> f64 {
        match axis {
            EvaluationAxis::ArgumentQuality => self.argument_quality,
            EvaluationAxis::AlignmentFocus => self.alignment_focus,
            EvaluationAxis::ReasoningDepth => self.reasoning_depth,
            EvaluationAxis::SafetyConsideration => self.safety_consideration,
            EvaluationAxis::Coherence => self.coherence,
        }
    }

    /// All six persisted values by name, axes first then `overall_score`.
    pub fn values(&self) -> [(&'static str, f64); 6] {
        [
            (EvaluationAxis::ArgumentQuality.as_str(), self.argument_quality),
            (EvaluationAxis::AlignmentFocus.as_str(), self.alignment_focus),
            (EvaluationAxis::ReasoningDepth.as_str(), self.reasoning_depth),
            (EvaluationAxis::SafetyConsideration.as_str(), self.safety_consideration),
            (EvaluationAxis::Coherence.as_str(), self.coherence),
            (OVERALL_SCORE, self.overall_score),
        ]
    }
}
