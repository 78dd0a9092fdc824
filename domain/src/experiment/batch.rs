//! Experiment batch: the persisted, resumable state of a whole run.

use super::ensemble::EnsembleConfig;
use super::outcome::{SkippedScenario, UnitKind};
use super::record::RecordedDebate;
use super::scenario::Scenario;
use crate::core::model::ModelId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header of a persisted batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMetadata {
    /// Local ISO-8601 start time
    pub timestamp: String,
    pub num_scenarios: usize,
    pub rounds: u32,
    /// Ensemble config names planned for the run
    pub ensemble_configs: Vec<String>,
    pub baseline_models: Vec<ModelId>,
}

impl BatchMetadata {
    pub fn new(
        num_scenarios: usize,
        rounds: u32,
        ensembles: &[EnsembleConfig],
        baseline_models: &[ModelId],
    ) -> Self {
        Self {
            timestamp: chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            num_scenarios,
            rounds,
            ensemble_configs: ensembles.iter().map(|c| c.name.clone()).collect(),
            baseline_models: baseline_models.to_vec(),
        }
    }
}

/// Incrementally-grown experiment state
///
/// A key present in `baseline_results` or `ensemble_results` marks that unit
/// as done, even when its list is empty because every scenario was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentBatch {
    pub metadata: BatchMetadata,
    pub baseline_results: BTreeMap<String, Vec<RecordedDebate>>,
    pub ensemble_results: BTreeMap<String, Vec<RecordedDebate>>,
    pub scenarios_tested: Vec<Scenario>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedScenario>,
}

impl ExperimentBatch {
    pub fn new(metadata: BatchMetadata, scenarios: Vec<Scenario>) -> Self {
        Self {
            metadata,
            baseline_results: BTreeMap::new(),
            ensemble_results: BTreeMap::new(),
            scenarios_tested: scenarios,
            skipped: Vec::new(),
        }
    }

    pub fn results(&self, kind: UnitKind) -> &BTreeMap<String, Vec<RecordedDebate>> {
        match kind {
            UnitKind::Baseline => &self.baseline_results,
            UnitKind::Ensemble => &self.ensemble_results,
        }
    }

    pub fn has_unit(&self, kind: UnitKind, name: &str) -> bool {
        self.results(kind).contains_key(name)
    }

    /// Record a finished unit. Callers never overwrite an existing unit.
    pub fn record_unit(
        &mut self,
        kind: UnitKind,
        name: impl Into<String>,
        debates: Vec<RecordedDebate>,
        skipped: Vec<SkippedScenario>,
    ) {
        let results = match kind {
            UnitKind::Baseline => &mut self.baseline_results,
            UnitKind::Ensemble => &mut self.ensemble_results,
        };
        results.insert(name.into(), debates);
        self.skipped.extend(skipped);
    }

    /// Total recorded debates across both groups
    pub fn debate_count(&self) -> usize {
        self.baseline_results
            .values()
            .chain(self.ensemble_results.values())
            .map(Vec::len)
            .sum()
    }

    /// Flattened debates of one group, in key order
    pub fn debates(&self, kind: UnitKind) -> impl Iterator<Item = (&str, &RecordedDebate)> {
        self.results(kind)
            .iter()
            .flat_map(|(unit, debates)| debates.iter().map(move |d| (unit.as_str(), d)))
    }

    /// Compare this batch against the configured units.
    pub fn progress(
        &self,
        baseline_models: &[ModelId],
        ensembles: &[EnsembleConfig],
    ) -> BatchProgress {
        BatchProgress {
            completed_baselines: self.baseline_results.keys().cloned().collect(),
            remaining_baselines: baseline_models
                .iter()
                .filter(|m| !self.has_unit(UnitKind::Baseline, m.as_str()))
                .cloned()
                .collect(),
            completed_ensembles: self.ensemble_results.keys().cloned().collect(),
            remaining_ensembles: ensembles
                .iter()
                .filter(|c| !self.has_unit(UnitKind::Ensemble, &c.name))
                .cloned()
                .collect(),
            skipped: self.skipped.len(),
            debates_recorded: self.debate_count(),
        }
    }
}

/// Completed vs remaining units of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchProgress {
    pub completed_baselines: Vec<String>,
    pub remaining_baselines: Vec<ModelId>,
    pub completed_ensembles: Vec<String>,
    pub remaining_ensembles: Vec<EnsembleConfig>,
    pub skipped: usize,
    pub debates_recorded: usize,
}

impl BatchProgress {
    pub fn is_complete(&self) -> bool {
        self.remaining_baselines.is_empty() && self.remaining_ensembles.is_empty()
    }

    pub fn remaining_units(&self) -> usize {
        self.remaining_baselines.len() + self.remaining_ensembles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> ExperimentBatch {
        let metadata = BatchMetadata::new(
            1,
            1,
            &EnsembleConfig::defaults()[..1],
            &["a".into(), "b".into()],
        );
        ExperimentBatch::new(metadata, vec![Scenario::new("X", "safety", "", "")])
    }

    #[test]
    fn test_empty_unit_counts_as_done() {
        let mut batch = batch();
        batch.record_unit(UnitKind::Baseline, "a", Vec::new(), Vec::new());
        assert!(batch.has_unit(UnitKind::Baseline, "a"));
        assert!(!batch.has_unit(UnitKind::Ensemble, "a"));

        let progress = batch.progress(&["a".into(), "b".into()], &EnsembleConfig::defaults()[..1]);
        assert_eq!(progress.remaining_baselines, vec![ModelId::from("b")]);
        assert_eq!(progress.remaining_ensembles.len(), 1);
        assert_eq!(progress.remaining_units(), 2);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_skipped_field_defaults_when_absent() {
        let json = r#"{
            "metadata": {
                "timestamp": "2025-01-01T10:00:00.000000",
                "num_scenarios": 0,
                "rounds": 2,
                "ensemble_configs": ["lightweight"],
                "baseline_models": ["phi3:3.8b"]
            },
            "baseline_results": {},
            "ensemble_results": {},
            "scenarios_tested": []
        }"#;
        let batch: ExperimentBatch = serde_json::from_str(json).unwrap();
        assert!(batch.skipped.is_empty());
        assert_eq!(batch.metadata.rounds, 2);

        let value = serde_json::to_value(&batch).unwrap();
        assert!(value.get("skipped").is_none());
    }

    #[test]
    fn test_metadata_timestamp_is_iso() {
        let batch = batch();
        assert!(
            chrono::NaiveDateTime::parse_from_str(&batch.metadata.timestamp, "%Y-%m-%dT%H:%M:%S%.f")
                .is_ok()
        );
    }
}
