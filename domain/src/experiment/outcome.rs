//! Per-scenario outcomes of an experiment unit.

use super::record::RecordedDebate;
use serde::{Deserialize, Serialize};

/// Which side of the comparison a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Baseline,
    Ensemble,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Baseline => "baseline",
            UnitKind::Ensemble => "ensemble",
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scenario that produced no debate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedScenario {
    pub kind: UnitKind,
    /// Baseline model or ensemble config name
    pub unit: String,
    pub scenario_index: usize,
    pub topic: String,
    pub reason: String,
}

/// Result of running one scenario within a unit
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioOutcome {
    Completed(RecordedDebate),
    Skipped {
        scenario_index: usize,
        topic: String,
        reason: String,
    },
}

impl ScenarioOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ScenarioOutcome::Completed(_))
    }
}

/// Split outcomes into recorded debates and skip entries for one unit.
pub fn partition_outcomes(
    kind: UnitKind,
    unit: &str,
    outcomes: Vec<ScenarioOutcome>,
) -> (Vec<RecordedDebate>, Vec<SkippedScenario>) {
    let mut debates = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            ScenarioOutcome::Completed(debate) => debates.push(debate),
            ScenarioOutcome::Skipped {
                scenario_index,
                topic,
                reason,
            } => skipped.push(SkippedScenario {
                kind,
                unit: unit.to_string(),
                scenario_index,
                topic,
                reason,
            }),
        }
    }
    (debates, skipped)
}
