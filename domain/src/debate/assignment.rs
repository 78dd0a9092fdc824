//! Role → model bindings for a single debate.

use super::role::DebateRole;
use crate::core::error::DomainError;
use crate::core::model::ModelId;
use serde::{Deserialize, Serialize};

/// Default proponent when an ensemble omits the role
pub const DEFAULT_PROPONENT: &str = "deepseek-r1:14b";
/// Default opponent when an ensemble omits the role
pub const DEFAULT_OPPONENT: &str = "mistral:7b";
/// Default judge when an ensemble omits the role
pub const DEFAULT_JUDGE: &str = "phi3:3.8b";

/// Which model plays which role (Value Object)
///
/// Serializes as `{"proponent": ..., "opponent": ..., "judge": ...}`, the
/// `ensemble_config` shape of persisted experiment files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub proponent: ModelId,
    pub opponent: ModelId,
    pub judge: ModelId,
}

impl RoleAssignment {
    pub fn new(proponent: ModelId, opponent: ModelId, judge: ModelId) -> Self {
        Self {
            proponent,
            opponent,
            judge,
        }
    }

    /// Baseline binding: one model plays every role.
    pub fn single(model: ModelId) -> Self {
        Self {
            proponent: model.clone(),
            opponent: model.clone(),
            judge: model,
        }
    }

    /// Ensemble binding with defaults for omitted roles.
    pub fn with_defaults(
        proponent: Option<ModelId>,
        opponent: Option<ModelId>,
        judge: Option<ModelId>,
    ) -> Self {
        Self {
            proponent: proponent.unwrap_or_else(|| DEFAULT_PROPONENT.into()),
            opponent: opponent.unwrap_or_else(|| DEFAULT_OPPONENT.into()),
            judge: judge.unwrap_or_else(|| DEFAULT_JUDGE.into()),
        }
    }

    pub fn model_for(&self, role: DebateRole) -> &ModelId {
        match role {
            DebateRole::Proponent => &self.proponent,
            DebateRole::Opponent => &self.opponent,
            DebateRole::Judge => &self.judge,
        }
    }

    /// True unless all three roles are bound to the same model.
    pub fn is_ensemble(&self) -> bool {
        !(self.proponent == self.opponent && self.opponent == self.judge)
    }

    /// Reject bindings with a blank model identifier.
    pub fn validate(&self) -> Result<(), DomainError> {
        for role in DebateRole::ALL {
            if self.model_for(role).is_empty() {
                return Err(DomainError::EmptyModel {
                    role: role.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Distinct models in role order
    pub fn distinct_models(&self) -> Vec<&ModelId> {
        let mut models: Vec<&ModelId> = Vec::with_capacity(3);
        for role in DebateRole::ALL {
            let model = self.model_for(role);
            if !models.contains(&model) {
                models.push(model);
            }
        }
        models
    }
}

impl Default for RoleAssignment {
    fn default() -> Self {
        Self::with_defaults(None, None, None)
    }
}

impl std::fmt::Display for RoleAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "proponent={}, opponent={}, judge={}",
            self.proponent, self.opponent, self.judge
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_is_not_ensemble() {
        let assignment = RoleAssignment::single("M".into());
        assert!(!assignment.is_ensemble());
        assert_eq!(assignment.distinct_models().len(), 1);
    }

    #[test]
    fn test_any_distinct_binding_is_ensemble() {
        let judge_differs = RoleAssignment::new("a".into(), "a".into(), "b".into());
        assert!(judge_differs.is_ensemble());

        let opponent_differs = RoleAssignment::new("a".into(), "b".into(), "a".into());
        assert!(opponent_differs.is_ensemble());

        let all_differ = RoleAssignment::new("a".into(), "b".into(), "c".into());
        assert!(all_differ.is_ensemble());
        assert_eq!(all_differ.distinct_models().len(), 3);
    }

    #[test]
    fn test_with_defaults_fills_omitted_roles() {
        let assignment = RoleAssignment::with_defaults(Some("gpt-oss:20b".into()), None, None);
        assert_eq!(assignment.proponent.as_str(), "gpt-oss:20b");
        assert_eq!(assignment.opponent.as_str(), DEFAULT_OPPONENT);
        assert_eq!(assignment.judge.as_str(), DEFAULT_JUDGE);
    }

    #[test]
    fn test_validate_rejects_blank_model() {
        let assignment = RoleAssignment::new("a".into(), "".into(), "c".into());
        assert_eq!(
            assignment.validate(),
            Err(DomainError::EmptyModel {
                role: "opponent".to_string()
            })
        );
    }

    #[test]
    fn test_serialized_shape() {
        let assignment = RoleAssignment::new("p".into(), "o".into(), "j".into());
        let value = serde_json::to_value(&assignment).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"proponent": "p", "opponent": "o", "judge": "j"})
        );
    }
}
