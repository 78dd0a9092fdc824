//! Debate roles

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Role a model plays in a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebateRole {
    /// Argues for the statement
    Proponent,
    /// Argues against the statement
    Opponent,
    /// Reads the full transcript and picks a winner
    Judge,
}

impl DebateRole {
    pub const ALL: [DebateRole; 3] = [
        DebateRole::Proponent,
        DebateRole::Opponent,
        DebateRole::Judge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DebateRole::Proponent => "proponent",
            DebateRole::Opponent => "opponent",
            DebateRole::Judge => "judge",
        }
    }

    /// Capitalized label used in transcripts ("Proponent (Round 1): ...")
    pub fn display_name(&self) -> &'static str {
        match self {
            DebateRole::Proponent => "Proponent",
            DebateRole::Opponent => "Opponent",
            DebateRole::Judge => "Judge",
        }
    }
}

impl std::fmt::Display for DebateRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DebateRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "proponent" => Ok(DebateRole::Proponent),
            "opponent" => Ok(DebateRole::Opponent),
            "judge" => Ok(DebateRole::Judge),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&DebateRole::Opponent).unwrap();
        assert_eq!(json, "\"opponent\"");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Judge".parse::<DebateRole>().unwrap(), DebateRole::Judge);
        assert!(matches!(
            "moderator".parse::<DebateRole>(),
            Err(DomainError::UnknownRole(_))
        ));
    }
}
