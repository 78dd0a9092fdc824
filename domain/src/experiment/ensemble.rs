//! Named ensemble configurations.

use crate::debate::RoleAssignment;
use serde::{Deserialize, Serialize};

/// A named role assignment tested as one ensemble unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsembleConfig {
    pub name: String,
    #[serde(flatten)]
    pub assignment: RoleAssignment,
}

impl EnsembleConfig {
    pub fn new(name: impl Into<String>, assignment: RoleAssignment) -> Self {
        Self {
            name: name.into(),
            assignment,
        }
    }

    /// The five ensembles compared by default.
    pub fn defaults() -> Vec<EnsembleConfig> {
        [
            ("lightweight", "deepseek-r1:7b", "mistral:7b", "phi3:3.8b"),
            ("balanced", "deepseek-r1:14b", "deepseek-r1:8b", "deepseek-r1:7b"),
            ("heavyweight", "deepseek-r1:32b", "deepseek-r1:14b", "deepseek-r1:8b"),
            ("creative_mix", "gpt-oss:20b", "deepseek-r1:14b", "deepseek-r1:8b"),
            ("reasoning_focused", "deepseek-r1:32b", "deepseek-r1:14b", "deepseek-r1:8b"),
        ]
        .into_iter()
        .map(|(name, proponent, opponent, judge)| {
            EnsembleConfig::new(
                name,
                RoleAssignment::new(proponent.into(), opponent.into(), judge.into()),
            )
        })
        .collect()
    }
}
