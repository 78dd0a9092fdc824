//! Orchestrator configuration: which units a batch runs.

use debate_domain::{BatchProgress, EnsembleConfig, ExperimentBatch, ModelId};
use std::collections::HashSet;

/// Baseline models and ensemble configs compared by a batch.
///
/// Passed explicitly to
/// [`RunExperimentUseCase`](crate::use_cases::run_experiment::RunExperimentUseCase);
/// resume compares a loaded batch against this, not against the batch's own
/// metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestratorConfig {
    pub baseline_models: Vec<ModelId>,
    pub ensembles: Vec<EnsembleConfig>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            baseline_models: ModelId::default_baselines(),
            ensembles: EnsembleConfig::defaults(),
        }
    }
}

impl OrchestratorConfig {
    pub fn new(baseline_models: Vec<ModelId>, ensembles: Vec<EnsembleConfig>) -> Self {
        Self {
            baseline_models,
            ensembles,
        }
    }

    pub fn total_units(&self) -> usize {
        self.baseline_models.len() + self.ensembles.len()
    }

    pub fn ensemble_names(&self) -> Vec<&str> {
        self.ensembles.iter().map(|c| c.name.as_str()).collect()
    }

    /// Every distinct model referenced by a baseline or an ensemble role
    pub fn referenced_models(&self) -> Vec<ModelId> {
        let mut seen = HashSet::new();
        let mut models = Vec::new();
        let ensemble_models = self
            .ensembles
            .iter()
            .flat_map(|c| c.assignment.distinct_models())
            .cloned();
        for model in self.baseline_models.iter().cloned().chain(ensemble_models) {
            if seen.insert(model.clone()) {
                models.push(model);
            }
        }
        models
    }

    pub fn progress_of(&self, batch: &ExperimentBatch) -> BatchProgress {
        batch.progress(&self.baseline_models, &self.ensembles)
    }
}
