//! Pretty-printed JSON files written atomically.
//!
//! Each save serializes the whole document into a temporary file in the
//! target directory and renames it over the destination, so a crash during
//! a write leaves the previous checkpoint intact.

use debate_application::{ExperimentStore, StoreError};
use debate_domain::{EvaluationDocument, ExperimentBatch};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// JSON file store for experiment batches and evaluations
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExperimentStore;

impl JsonExperimentStore {
    pub fn new() -> Self {
        Self
    }

    fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        file.write_all(json.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| StoreError::io(path, e))?;
        file.persist(path)
            .map_err(|e| StoreError::io(path, e.error))?;

        debug!("Wrote {} bytes to {}", json.len(), path.display());
        Ok(())
    }
}

impl ExperimentStore for JsonExperimentStore {
    fn save_batch(&self, batch: &ExperimentBatch, path: &Path) -> Result<(), StoreError> {
        Self::write_json(batch, path)
    }

    fn load_batch(&self, path: &Path) -> Result<ExperimentBatch, StoreError> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| {
            StoreError::Serialization(format!("{}: {}", path.display(), e))
        })
    }

    fn save_evaluation(
        &self,
        document: &EvaluationDocument,
        path: &Path,
    ) -> Result<(), StoreError> {
        Self::write_json(document, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::{
        Argument, BatchMetadata, DebateRole, EnsembleConfig, ModelId, RecordedDebate,
        RoleAssignment, Scenario, UnitKind, Winner,
    };

    fn batch() -> ExperimentBatch {
        let scenario = Scenario::new("Topic", "safety", "desc", "focus");
        let mut batch = ExperimentBatch::new(
            BatchMetadata::new(
                1,
                1,
                &[EnsembleConfig::new(
                    "duo",
                    RoleAssignment::new("a".into(), "b".into(), "a".into()),
                )],
                &[ModelId::from("a")],
            ),
            vec![scenario],
        );
        let debate = RecordedDebate {
            topic: "Topic".to_string(),
            scenario_category: "safety".to_string(),
            scenario_focus: "focus".to_string(),
            winner: Winner::Opponent,
            judge_reasoning: "Winner: OPPONENT".to_string(),
            total_time: 3.5,
            ensemble_used: false,
            arguments: vec![
                Argument::new(DebateRole::Proponent, "a".into(), "for", 1),
                Argument::new(DebateRole::Opponent, "a".into(), "against", 1),
                Argument::new(DebateRole::Judge, "a".into(), "Winner: OPPONENT", 2),
            ],
            ensemble_config: None,
        };
        batch.record_unit(UnitKind::Baseline, "a", vec![debate], Vec::new());
        batch
    }

    #[test]
    fn save_then_load_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("experiment.json");
        let store = JsonExperimentStore::new();

        let mut saved = batch();
        for debate in saved.baseline_results.values_mut().flatten() {
            debate.arguments.iter_mut().for_each(|a| a.timestamp = 1_741_500_000.25);
        }
        store.save_batch(&saved, &path).unwrap();
        let loaded = store.load_batch(&path).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn save_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("experiment.json");
        let store = JsonExperimentStore::new();

        let mut first = batch();
        first.baseline_results.clear();
        store.save_batch(&first, &path).unwrap();
        store.save_batch(&batch(), &path).unwrap();

        assert_eq!(store.load_batch(&path).unwrap().debate_count(), 1);
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn written_file_uses_persisted_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("experiment.json");
        JsonExperimentStore::new().save_batch(&batch(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["metadata"]["ensemble_configs"][0], "duo");
        assert_eq!(value["baseline_results"]["a"][0]["winner"], "OPPONENT");
        assert_eq!(value["scenarios_tested"][0]["alignment_focus"], "focus");
        assert!(value.get("skipped").is_none());
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonExperimentStore::new().load_batch(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn load_malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let result = JsonExperimentStore::new().load_batch(&path);
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
