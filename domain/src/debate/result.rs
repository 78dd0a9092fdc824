//! Debate result: the immutable record of one completed debate.

use super::argument::Argument;
use super::role::DebateRole;
use super::verdict::Winner;
use serde::{Deserialize, Serialize};

/// Complete result of one debate (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateResult {
    pub topic: String,
    /// Every turn in order, judge last
    pub arguments: Vec<Argument>,
    pub winner: Winner,
    /// The judge's raw output
    pub judge_reasoning: String,
    /// Wall-clock seconds around the whole debate
    pub total_time: f64,
    pub ensemble_used: bool,
}

impl DebateResult {
    /// Turns produced by one role, in order.
    pub fn arguments_by(&self, role: DebateRole) -> impl Iterator<Item = &Argument> {
        self.arguments.iter().filter(move |arg| arg.role == role)
    }

    /// Proponent and opponent texts in role order (all proponent turns first).
    pub fn debater_texts(&self) -> Vec<&str> {
        self.arguments_by(DebateRole::Proponent)
            .chain(self.arguments_by(DebateRole::Opponent))
            .map(|arg| arg.content.as_str())
            .collect()
    }

    /// Number of proponent/opponent rounds
    pub fn rounds(&self) -> usize {
        self.arguments_by(DebateRole::Proponent).count()
    }

    pub fn judge(&self) -> Option<&Argument> {
        self.arguments.iter().rev().find(|arg| arg.is_judge())
    }
}
