//! Argument value object: one generated turn of a debate.

use super::role::DebateRole;
use crate::core::model::ModelId;
use serde::{Deserialize, Serialize};

/// A single turn produced by a model (Value Object)
///
/// Turns are recorded verbatim, including gateway error sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub role: DebateRole,
    pub model: ModelId,
    pub content: String,
    /// 1-based round; the judge turn uses `rounds + 1`
    pub round_number: u32,
    /// Seconds since the Unix epoch when the turn was recorded
    pub timestamp: f64,
}

impl Argument {
    /// Create an argument stamped with the current wall-clock time.
    pub fn new(
        role: DebateRole,
        model: ModelId,
        content: impl Into<String>,
        round_number: u32,
    ) -> Self {
        Self {
            role,
            model,
            content: content.into(),
            round_number,
            timestamp: unix_seconds_now(),
        }
    }

    pub fn is_judge(&self) -> bool {
        self.role == DebateRole::Judge
    }
}

/// Current wall-clock time as fractional Unix seconds.
pub fn unix_seconds_now() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
