//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Conversions into application config structs live beside them.

mod evaluation;
mod experiment;
mod generation;
mod logging;
mod ollama;

pub use evaluation::FileEvaluationConfig;
pub use experiment::{FileEnsembleConfig, FileExperimentConfig};
pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use ollama::FileOllamaConfig;

use debate_application::{EvaluatorConfig, GenerationOptions, ResultPaths};
use debate_domain::ModelId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("ollama.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("{field}: model name cannot be empty")]
    EmptyModelName { field: String },

    #[error("experiment.ensembles: ensemble name cannot be empty")]
    EmptyEnsembleName,

    #[error("experiment.ensembles: duplicate ensemble name '{0}'")]
    DuplicateEnsemble(String),

    #[error("experiment.rounds cannot be 0")]
    ZeroRounds,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub ollama: FileOllamaConfig,
    pub generation: FileGenerationConfig,
    pub experiment: FileExperimentConfig,
    pub evaluation: FileEvaluationConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.ollama.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.experiment.rounds == 0 {
            issues.push(ConfigValidationError::ZeroRounds);
        }

        let empty = |field: String| ConfigValidationError::EmptyModelName { field };
        for (i, model) in self.experiment.baseline_models.iter().enumerate() {
            if model.trim().is_empty() {
                issues.push(empty(format!("experiment.baseline_models[{}]", i)));
            }
        }

        let mut names = HashSet::new();
        for ensemble in &self.experiment.ensembles {
            if ensemble.name.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyEnsembleName);
            } else if !names.insert(ensemble.name.as_str()) {
                issues.push(ConfigValidationError::DuplicateEnsemble(
                    ensemble.name.clone(),
                ));
            }
            for (role, model) in [
                ("proponent", &ensemble.proponent),
                ("opponent", &ensemble.opponent),
                ("judge", &ensemble.judge),
            ] {
                if model.as_deref().is_some_and(|m| m.trim().is_empty()) {
                    issues.push(empty(format!(
                        "experiment.ensembles.{}.{}",
                        ensemble.name, role
                    )));
                }
            }
        }

        if self.evaluation.evaluator_model.trim().is_empty() {
            issues.push(empty("evaluation.evaluator_model".to_string()));
        }

        issues
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions::default()
            .with_max_tokens(self.generation.max_tokens)
            .with_temperature(self.generation.temperature)
            .with_top_p(self.generation.top_p)
            .with_timeout_seconds(self.ollama.timeout_seconds)
    }

    pub fn evaluator_config(&self) -> EvaluatorConfig {
        EvaluatorConfig::default()
            .with_evaluator_model(ModelId::new(self.evaluation.evaluator_model.trim()))
            .with_sample(self.evaluation.sample)
    }

    pub fn result_paths(&self) -> ResultPaths {
        ResultPaths::new(&self.experiment.results_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[ollama]
base_url = "http://gpu-box:11434"
timeout_seconds = 120

[generation]
max_tokens = 400
temperature = 0.2

[experiment]
baseline_models = ["phi3:3.8b"]
results_dir = "out"
rounds = 2
ensembles = []

[evaluation]
evaluator_model = "mistral:7b"
sample = 4

[logging]
transcript = true
log_file = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama.base_url, "http://gpu-box:11434");
        assert_eq!(config.generation.max_tokens, 400);
        assert_eq!(config.generation.top_p, 0.9);
        assert_eq!(config.experiment.rounds, 2);
        assert!(config.experiment.ensembles.is_empty());
        assert!(config.logging.transcript);
        assert!(!config.logging.log_file);

        let options = config.generation_options();
        assert_eq!(options.timeout, Duration::from_secs(120));
        assert_eq!(options.temperature, 0.2);

        let evaluator = config.evaluator_config();
        assert_eq!(evaluator.evaluator_model.as_str(), "mistral:7b");
        assert_eq!(evaluator.sample, Some(4));
        assert_eq!(config.result_paths().results_dir().to_str(), Some("out"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[ollama]
timeout_seconds = 30
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama.timeout_seconds, 30);
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        assert_eq!(config.experiment, FileExperimentConfig::default());
        assert_eq!(config.evaluation.evaluator_model, "deepseek-r1:14b");
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.ollama.timeout_seconds = 0;
        config.experiment.rounds = 0;
        config.experiment.baseline_models.push(" ".to_string());
        let duplicate = config.experiment.ensembles[0].clone();
        config.experiment.ensembles.push(duplicate.clone());
        config.experiment.ensembles.push(FileEnsembleConfig {
            name: String::new(),
            judge: Some(String::new()),
            ..duplicate
        });

        let issues = config.validate();
        assert!(issues.contains(&ConfigValidationError::InvalidTimeout));
        assert!(issues.contains(&ConfigValidationError::ZeroRounds));
        assert!(issues.contains(&ConfigValidationError::EmptyEnsembleName));
        assert!(issues.contains(&ConfigValidationError::DuplicateEnsemble(
            "lightweight".to_string()
        )));
        assert!(issues.contains(&ConfigValidationError::EmptyModelName {
            field: "experiment.baseline_models[5]".to_string()
        }));
        assert!(issues.contains(&ConfigValidationError::EmptyModelName {
            field: "experiment.ensembles..judge".to_string()
        }));
        assert_eq!(issues.len(), 6);
    }
}
