//! Evaluation records and the persisted evaluation document.

use super::axis::EvaluationAxis;
use super::metrics::EvaluationMetrics;
use super::statistics::ComparisonStatistics;
use crate::core::model::ModelId;
use crate::debate::RoleAssignment;
use serde::{Deserialize, Serialize};

/// Scores for one recorded debate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateEvaluation {
    /// Position within its group's evaluated list
    pub debate_index: usize,
    /// Baseline model or ensemble config name
    pub unit: String,
    pub topic: String,
    pub category: String,
    pub metrics: EvaluationMetrics,
    /// Axes whose evaluator call failed and were scored neutral
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_axes: Vec<EvaluationAxis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ensemble_config: Option<RoleAssignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetadata {
    pub evaluator_model: ModelId,
    /// Seconds since the Unix epoch
    pub evaluation_timestamp: f64,
    pub total_debates_evaluated: usize,
    pub source_file: String,
}

/// Full evaluator output written beside the experiment file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationDocument {
    pub metadata: EvaluationMetadata,
    pub baseline_evaluations: Vec<DebateEvaluation>,
    pub ensemble_evaluations: Vec<DebateEvaluation>,
    pub comparison_statistics: ComparisonStatistics,
}

impl EvaluationDocument {
    pub fn failed_axis_count(&self) -> usize {
        self.baseline_evaluations
            .iter()
            .chain(&self.ensemble_evaluations)
            .map(|e| e.failed_axes.len())
            .sum()
    }
}
