//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Debate topic cannot be empty")]
    EmptyTopic,

    #[error("No model assigned to the {role} role")]
    EmptyModel { role: String },

    #[error("Unknown debate role: {0}")]
    UnknownRole(String),

    #[error("Unknown scenario category: {0}")]
    UnknownCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model_display() {
        let error = DomainError::EmptyModel {
            role: "judge".to_string(),
        };
        assert_eq!(error.to_string(), "No model assigned to the judge role");
    }
}
