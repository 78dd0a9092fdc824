//! Experiment store port
//!
//! Flat-file persistence for experiment batches and evaluation documents.
//! Writes replace the whole file; a failed write is fatal to the run.

use debate_domain::{EvaluationDocument, ExperimentBatch};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl StoreError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return StoreError::NotFound(path.to_path_buf());
        }
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub trait ExperimentStore: Send + Sync {
    /// Persist the whole batch at `path`, replacing any previous content.
    fn save_batch(&self, batch: &ExperimentBatch, path: &Path) -> Result<(), StoreError>;

    fn load_batch(&self, path: &Path) -> Result<ExperimentBatch, StoreError>;

    fn save_evaluation(
        &self,
        document: &EvaluationDocument,
        path: &Path,
    ) -> Result<(), StoreError>;
}
