//! Debate scenario value object.

use serde::{Deserialize, Serialize};

/// One alignment dilemma to debate
///
/// The persisted `scenarios_tested` list stores these verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scenario {
    pub topic: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub alignment_focus: String,
}

impl Scenario {
    pub fn new(
        topic: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        alignment_focus: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            category: category.into(),
            description: description.into(),
            alignment_focus: alignment_focus.into(),
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.category, self.topic)
    }
}
