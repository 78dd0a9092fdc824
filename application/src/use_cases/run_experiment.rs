//! Run Experiment use case
//!
//! Runs every baseline model, then every ensemble config, across the same
//! scenario list. The batch is written before the first unit and after each
//! unit completes, so an interrupted run can be resumed from the file.

use super::run_debate::RunDebateUseCase;
use crate::config::OrchestratorConfig;
use crate::ports::experiment_store::{ExperimentStore, StoreError};
use crate::ports::model_gateway::ModelGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use debate_domain::{
    BatchMetadata, EnsembleConfig, ExperimentBatch, ModelId, RecordedDebate, RoleAssignment,
    Scenario, ScenarioOutcome, UnitKind, partition_outcomes,
};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort a batch
#[derive(Error, Debug)]
pub enum RunExperimentError {
    #[error("Failed to persist experiment: {0}")]
    Store(#[from] StoreError),

    #[error("No scenarios to run")]
    NoScenarios,
}

/// One unit of work: a baseline model or a named ensemble
struct Unit {
    kind: UnitKind,
    name: String,
    assignment: RoleAssignment,
}

impl Unit {
    fn baseline(model: &ModelId) -> Self {
        Self {
            kind: UnitKind::Baseline,
            name: model.to_string(),
            assignment: RoleAssignment::single(model.clone()),
        }
    }

    fn ensemble(config: &EnsembleConfig) -> Self {
        Self {
            kind: UnitKind::Ensemble,
            name: config.name.clone(),
            assignment: config.assignment.clone(),
        }
    }
}

/// Use case for running and resuming experiment batches
pub struct RunExperimentUseCase<G: ModelGateway + 'static> {
    debates: RunDebateUseCase<G>,
    store: Arc<dyn ExperimentStore>,
    config: OrchestratorConfig,
}

impl<G: ModelGateway + 'static> RunExperimentUseCase<G> {
    pub fn new(
        debates: RunDebateUseCase<G>,
        store: Arc<dyn ExperimentStore>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            debates,
            store,
            config,
        }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Run a fresh batch with default (no-op) progress
    pub async fn run_experiment_suite(
        &self,
        scenarios: Vec<Scenario>,
        rounds: u32,
        path: &Path,
    ) -> Result<ExperimentBatch, RunExperimentError> {
        self.run_experiment_suite_with_progress(scenarios, rounds, path, &NoProgress)
            .await
    }

    /// Run a fresh batch, persisting to `path`.
    pub async fn run_experiment_suite_with_progress(
        &self,
        scenarios: Vec<Scenario>,
        rounds: u32,
        path: &Path,
        progress: &dyn ProgressNotifier,
    ) -> Result<ExperimentBatch, RunExperimentError> {
        if scenarios.is_empty() {
            return Err(RunExperimentError::NoScenarios);
        }
        info!(
            "Starting experiment suite with {} scenarios, {} rounds",
            scenarios.len(),
            rounds
        );

        let metadata = BatchMetadata::new(
            scenarios.len(),
            rounds,
            &self.config.ensembles,
            &self.config.baseline_models,
        );
        let mut batch = ExperimentBatch::new(metadata, scenarios);
        self.save(&batch, path, progress)?;

        let units: Vec<Unit> = self
            .config
            .baseline_models
            .iter()
            .map(Unit::baseline)
            .chain(self.config.ensembles.iter().map(Unit::ensemble))
            .collect();
        self.run_units(&mut batch, &units, path, progress).await?;

        Ok(batch)
    }

    /// Resume with default (no-op) progress
    pub async fn resume_from_incremental(
        &self,
        path: &Path,
    ) -> Result<ExperimentBatch, RunExperimentError> {
        self.resume_from_incremental_with_progress(path, &NoProgress)
            .await
    }

    /// Load a partial batch and run only the configured units it lacks.
    ///
    /// Uses the scenarios and round count recorded in the file. When nothing
    /// remains the batch is returned as loaded, with no model call or write.
    pub async fn resume_from_incremental_with_progress(
        &self,
        path: &Path,
        progress: &dyn ProgressNotifier,
    ) -> Result<ExperimentBatch, RunExperimentError> {
        let mut batch = self.store.load_batch(path)?;
        let remaining = self.config.progress_of(&batch);

        if remaining.is_complete() {
            info!("Nothing to resume in {}", path.display());
            return Ok(batch);
        }

        info!(
            "Resuming {}: {} baseline models and {} ensemble configs remaining",
            path.display(),
            remaining.remaining_baselines.len(),
            remaining.remaining_ensembles.len()
        );

        let units: Vec<Unit> = remaining
            .remaining_baselines
            .iter()
            .map(Unit::baseline)
            .chain(remaining.remaining_ensembles.iter().map(Unit::ensemble))
            .collect();
        self.run_units(&mut batch, &units, path, progress).await?;

        info!("Resume completed");
        Ok(batch)
    }

    async fn run_units(
        &self,
        batch: &mut ExperimentBatch,
        units: &[Unit],
        path: &Path,
        progress: &dyn ProgressNotifier,
    ) -> Result<(), RunExperimentError> {
        let scenarios = batch.scenarios_tested.clone();
        let rounds = batch.metadata.rounds;
        progress.on_suite_start(units.len(), scenarios.len());

        for unit in units {
            if batch.has_unit(unit.kind, &unit.name) {
                continue;
            }
            progress.on_unit_start(unit.kind, &unit.name, scenarios.len());

            let mut outcomes = Vec::with_capacity(scenarios.len());
            for (index, scenario) in scenarios.iter().enumerate() {
                let outcome = self.run_scenario(unit, index, scenario, rounds).await;
                match &outcome {
                    ScenarioOutcome::Completed(_) => info!(
                        "Completed {} - scenario {}/{}",
                        unit.name,
                        index + 1,
                        scenarios.len()
                    ),
                    ScenarioOutcome::Skipped { reason, .. } => warn!(
                        "Error in {} {} scenario {}: {}",
                        unit.kind, unit.name, index, reason
                    ),
                }
                progress.on_scenario_complete(unit.kind, &unit.name, index, outcome.is_completed());
                outcomes.push(outcome);
            }

            let (debates, skipped) = partition_outcomes(unit.kind, &unit.name, outcomes);
            batch.record_unit(unit.kind, unit.name.clone(), debates, skipped);
            self.save(batch, path, progress)?;
            info!(
                "Saved incremental results after completing {} {}",
                unit.kind, unit.name
            );
            progress.on_unit_complete(unit.kind, &unit.name);
        }
        Ok(())
    }

    async fn run_scenario(
        &self,
        unit: &Unit,
        index: usize,
        scenario: &Scenario,
        rounds: u32,
    ) -> ScenarioOutcome {
        match self
            .debates
            .run_debate(&unit.assignment, &scenario.topic, rounds)
            .await
        {
            Ok(result) => {
                let recorded = RecordedDebate::from_result(result, scenario);
                ScenarioOutcome::Completed(match unit.kind {
                    UnitKind::Baseline => recorded,
                    UnitKind::Ensemble => recorded.with_ensemble_config(unit.assignment.clone()),
                })
            }
            Err(e) => ScenarioOutcome::Skipped {
                scenario_index: index,
                topic: scenario.topic.clone(),
                reason: e.to_string(),
            },
        }
    }

    fn save(
        &self,
        batch: &ExperimentBatch,
        path: &Path,
        progress: &dyn ProgressNotifier,
    ) -> Result<(), RunExperimentError> {
        self.store.save_batch(batch, path)?;
        progress.on_batch_saved(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MemoryStore, ScriptedGateway};
    use std::path::PathBuf;

    fn scenarios() -> Vec<Scenario> {
        vec![
            Scenario::new("Topic A", "safety", "", "precaution vs progress"),
            Scenario::new("Topic B", "fairness", "", "equity vs optimization"),
        ]
    }

    fn config() -> OrchestratorConfig {
        OrchestratorConfig::new(
            vec!["m1".into(), "m2".into()],
            vec![EnsembleConfig::new(
                "duo",
                RoleAssignment::new("m1".into(), "m2".into(), "m1".into()),
            )],
        )
    }

    fn use_case(
        gateway: Arc<ScriptedGateway>,
        store: Arc<MemoryStore>,
    ) -> RunExperimentUseCase<ScriptedGateway> {
        RunExperimentUseCase::new(RunDebateUseCase::new(gateway), store, config())
    }

    fn path() -> PathBuf {
        PathBuf::from("results/experiment_results_20250101_000000_incremental.json")
    }

    #[tokio::test]
    async fn test_suite_runs_every_unit_and_saves_incrementally() {
        let gateway = Arc::new(ScriptedGateway::new());
        let store = Arc::new(MemoryStore::default());
        let batch = use_case(gateway.clone(), store.clone())
            .run_experiment_suite(scenarios(), 1, &path())
            .await
            .unwrap();

        assert_eq!(batch.baseline_results["m1"].len(), 2);
        assert_eq!(batch.baseline_results["m2"].len(), 2);
        assert_eq!(batch.ensemble_results["duo"].len(), 2);
        assert_eq!(batch.metadata.rounds, 1);
        assert_eq!(batch.metadata.ensemble_configs, vec!["duo".to_string()]);
        // 3 units x 2 scenarios x 3 calls
        assert_eq!(gateway.call_count(), 18);

        // Empty structure first, then one save per unit
        let saves = store.saves();
        assert_eq!(saves.len(), 4);
        assert_eq!(saves[0].1.debate_count(), 0);
        assert_eq!(saves[1].1.baseline_results.len(), 1);
        assert!(saves[1].1.ensemble_results.is_empty());
        assert_eq!(saves.last().unwrap().1, batch);
        assert!(saves.iter().all(|(p, _)| *p == path()));
    }

    #[tokio::test]
    async fn test_records_scenario_annotations_and_ensemble_config() {
        let gateway = Arc::new(ScriptedGateway::new());
        let store = Arc::new(MemoryStore::default());
        let batch = use_case(gateway, store)
            .run_experiment_suite(scenarios(), 1, &path())
            .await
            .unwrap();

        let baseline = &batch.baseline_results["m1"][1];
        assert_eq!(baseline.topic, "Topic B");
        assert_eq!(baseline.scenario_category, "fairness");
        assert_eq!(baseline.scenario_focus, "equity vs optimization");
        assert!(baseline.ensemble_config.is_none());
        assert!(!baseline.ensemble_used);

        let ensemble = &batch.ensemble_results["duo"][0];
        assert!(ensemble.ensemble_used);
        assert_eq!(ensemble.ensemble_config.as_ref().unwrap().opponent.as_str(), "m2");
    }

    #[tokio::test]
    async fn test_invalid_scenario_is_skipped_not_fatal() {
        let gateway = Arc::new(ScriptedGateway::new());
        let store = Arc::new(MemoryStore::default());
        let mut scenarios = scenarios();
        scenarios.insert(1, Scenario::new("", "safety", "", ""));

        let batch = use_case(gateway, store)
            .run_experiment_suite(scenarios, 1, &path())
            .await
            .unwrap();

        assert_eq!(batch.baseline_results["m1"].len(), 2);
        assert_eq!(batch.skipped.len(), 3);
        assert!(batch.skipped.iter().all(|s| s.scenario_index == 1));
        assert_eq!(batch.skipped[0].unit, "m1");
        assert_eq!(batch.skipped[2].kind, UnitKind::Ensemble);
        assert_eq!(batch.skipped[0].reason, "Debate topic cannot be empty");
    }

    #[tokio::test]
    async fn test_store_failure_is_fatal() {
        let gateway = Arc::new(ScriptedGateway::new());
        let store = Arc::new(MemoryStore::failing());
        let result = use_case(gateway.clone(), store)
            .run_experiment_suite(scenarios(), 1, &path())
            .await;

        assert!(matches!(result, Err(RunExperimentError::Store(_))));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_scenarios_rejected() {
        let gateway = Arc::new(ScriptedGateway::new());
        let store = Arc::new(MemoryStore::default());
        let result = use_case(gateway, store.clone())
            .run_experiment_suite(Vec::new(), 1, &path())
            .await;
        assert!(matches!(result, Err(RunExperimentError::NoScenarios)));
        assert!(store.saves().is_empty());
    }

    async fn completed_batch() -> ExperimentBatch {
        let gateway = Arc::new(ScriptedGateway::new());
        let store = Arc::new(MemoryStore::default());
        use_case(gateway, store)
            .run_experiment_suite(scenarios(), 2, &path())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_resume_complete_batch_is_idempotent() {
        let complete = completed_batch().await;
        let gateway = Arc::new(ScriptedGateway::new());
        let store = Arc::new(MemoryStore::with_batch(complete.clone()));

        let resumed = use_case(gateway.clone(), store.clone())
            .resume_from_incremental(&path())
            .await
            .unwrap();

        assert_eq!(resumed, complete);
        assert_eq!(gateway.call_count(), 0);
        assert!(store.saves().is_empty());
    }

    #[tokio::test]
    async fn test_resume_fills_missing_baseline() {
        let mut partial = completed_batch().await;
        partial.baseline_results.remove("m2");
        let kept_m1 = partial.baseline_results["m1"].clone();
        let gateway = Arc::new(ScriptedGateway::new());
        let store = Arc::new(MemoryStore::with_batch(partial));

        let resumed = use_case(gateway.clone(), store.clone())
            .resume_from_incremental(&path())
            .await
            .unwrap();

        assert_eq!(resumed.baseline_results["m2"].len(), resumed.scenarios_tested.len());
        assert_eq!(resumed.baseline_results["m1"], kept_m1);
        // Rounds come from the file: 2 scenarios x (2*2 + 1) calls
        assert_eq!(gateway.call_count(), 10);
        let saves = store.saves();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].0, path());
        assert_eq!(saves[0].1, resumed);
    }

    #[tokio::test]
    async fn test_resume_ignores_units_only_in_file() {
        let mut partial = completed_batch().await;
        partial
            .baseline_results
            .insert("retired".to_string(), Vec::new());
        partial.ensemble_results.clear();
        let gateway = Arc::new(ScriptedGateway::new());
        let store = Arc::new(MemoryStore::with_batch(partial));

        let resumed = use_case(gateway, store)
            .resume_from_incremental(&path())
            .await
            .unwrap();

        assert!(resumed.baseline_results.contains_key("retired"));
        assert_eq!(resumed.ensemble_results["duo"].len(), 2);
    }

    #[tokio::test]
    async fn test_resume_missing_file() {
        let gateway = Arc::new(ScriptedGateway::new());
        let store = Arc::new(MemoryStore::default());
        let result = use_case(gateway, store)
            .resume_from_incremental(&path())
            .await;
        assert!(matches!(
            result,
            Err(RunExperimentError::Store(StoreError::NotFound(_)))
        ));
    }
}
