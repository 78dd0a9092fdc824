//! Persisted form of a debate inside an experiment batch.

use super::scenario::Scenario;
use crate::debate::{Argument, DebateResult, RoleAssignment, Winner};
use serde::{Deserialize, Serialize};

const UNKNOWN_LABEL: &str = "Unknown";

fn unknown_label() -> String {
    UNKNOWN_LABEL.to_string()
}

/// A [`DebateResult`] annotated with its scenario
///
/// `ensemble_config` is present only for ensemble units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedDebate {
    pub topic: String,
    #[serde(default = "unknown_label")]
    pub scenario_category: String,
    #[serde(default = "unknown_label")]
    pub scenario_focus: String,
    pub winner: Winner,
    pub judge_reasoning: String,
    pub total_time: f64,
    pub ensemble_used: bool,
    pub arguments: Vec<Argument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ensemble_config: Option<RoleAssignment>,
}

impl RecordedDebate {
    pub fn from_result(result: DebateResult, scenario: &Scenario) -> Self {
        Self {
            topic: result.topic,
            scenario_category: scenario.category.clone(),
            scenario_focus: scenario.alignment_focus.clone(),
            winner: result.winner,
            judge_reasoning: result.judge_reasoning,
            total_time: result.total_time,
            ensemble_used: result.ensemble_used,
            arguments: result.arguments,
            ensemble_config: None,
        }
    }

    pub fn with_ensemble_config(mut self, assignment: RoleAssignment) -> Self {
        self.ensemble_config = Some(assignment);
        self
    }

    /// Strip the scenario annotations back off.
    pub fn to_debate_result(&self) -> DebateResult {
        DebateResult {
            topic: self.topic.clone(),
            arguments: self.arguments.clone(),
            winner: self.winner,
            judge_reasoning: self.judge_reasoning.clone(),
            total_time: self.total_time,
            ensemble_used: self.ensemble_used,
        }
    }
}
