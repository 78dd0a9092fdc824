//! Experiment configuration from TOML (`[experiment]` section)
//!
//! ```toml
//! [experiment]
//! baseline_models = ["mistral:7b", "phi3:3.8b"]
//! results_dir = "results"
//! rounds = 3
//!
//! [[experiment.ensembles]]
//! name = "lightweight"
//! proponent = "deepseek-r1:7b"
//! opponent = "mistral:7b"
//! judge = "phi3:3.8b"
//! ```
//!
//! Lists replace the built-in defaults wholesale. An ensemble entry that
//! omits a role gets the default model for it (proponent `deepseek-r1:14b`,
//! opponent `mistral:7b`, judge `phi3:3.8b`).

use debate_application::OrchestratorConfig;
use debate_domain::{EnsembleConfig, ModelId, RoleAssignment};
use serde::{Deserialize, Serialize};

/// One `[[experiment.ensembles]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEnsembleConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proponent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge: Option<String>,
}

impl From<&EnsembleConfig> for FileEnsembleConfig {
    fn from(config: &EnsembleConfig) -> Self {
        Self {
            name: config.name.clone(),
            proponent: Some(config.assignment.proponent.to_string()),
            opponent: Some(config.assignment.opponent.to_string()),
            judge: Some(config.assignment.judge.to_string()),
        }
    }
}

impl FileEnsembleConfig {
    pub fn to_ensemble_config(&self) -> EnsembleConfig {
        let model = |role: &Option<String>| role.as_deref().map(|m| ModelId::new(m.trim()));
        EnsembleConfig::new(
            self.name.clone(),
            RoleAssignment::with_defaults(
                model(&self.proponent),
                model(&self.opponent),
                model(&self.judge),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExperimentConfig {
    pub baseline_models: Vec<String>,
    pub ensembles: Vec<FileEnsembleConfig>,
    pub results_dir: String,
    /// Default round count for custom runs
    pub rounds: u32,
}

impl Default for FileExperimentConfig {
    fn default() -> Self {
        Self {
            baseline_models: ModelId::default_baselines()
                .iter()
                .map(ToString::to_string)
                .collect(),
            ensembles: EnsembleConfig::defaults()
                .iter()
                .map(FileEnsembleConfig::from)
                .collect(),
            results_dir: "results".to_string(),
            rounds: 3,
        }
    }
}

impl FileExperimentConfig {
    pub fn to_orchestrator_config(&self) -> OrchestratorConfig {
        OrchestratorConfig::new(
            self.baseline_models
                .iter()
                .map(|m| ModelId::new(m.trim()))
                .collect(),
            self.ensembles
                .iter()
                .map(FileEnsembleConfig::to_ensemble_config)
                .collect(),
        )
    }
}
