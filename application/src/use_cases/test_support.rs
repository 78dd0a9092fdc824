//! Scripted test doubles shared by the use case tests.

use crate::ports::experiment_store::{ExperimentStore, StoreError};
use crate::ports::model_gateway::{GatewayError, GenerationRequest, ModelGateway};
use async_trait::async_trait;
use debate_domain::{EvaluationDocument, ExperimentBatch, ModelId};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Gateway that replays queued responses and records every request.
///
/// When the queue is empty, judge turns (system prompt mentions JUDGE) get
/// `default_verdict` and every other call gets `"argument"`.
pub struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
    default_verdict: String,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::with_default_verdict("Winner: PROPONENT")
    }

    pub fn with_default_verdict(verdict: &str) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            default_verdict: verdict.to_string(),
        }
    }

    pub fn scripted(responses: Vec<Result<String, GatewayError>>) -> Self {
        let gateway = Self::new();
        *gateway.responses.lock().unwrap() = responses.into();
        gateway
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn try_generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(response) = self.responses.lock().unwrap().pop_front() {
            return response;
        }
        let is_judge = request
            .system
            .as_deref()
            .is_some_and(|s| s.contains("Your role is JUDGE"));
        if is_judge {
            Ok(self.default_verdict.clone())
        } else {
            Ok("argument".to_string())
        }
    }

    async fn available_models(&self) -> Result<Vec<ModelId>, GatewayError> {
        Ok(vec!["M".into()])
    }
}

/// Store that keeps every saved batch in memory.
#[derive(Default)]
pub struct MemoryStore {
    loadable: Mutex<Option<ExperimentBatch>>,
    saves: Mutex<Vec<(PathBuf, ExperimentBatch)>>,
    evaluations: Mutex<Vec<(PathBuf, EvaluationDocument)>>,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn with_batch(batch: ExperimentBatch) -> Self {
        Self {
            loadable: Mutex::new(Some(batch)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn saves(&self) -> Vec<(PathBuf, ExperimentBatch)> {
        self.saves.lock().unwrap().clone()
    }

    pub fn evaluations(&self) -> Vec<(PathBuf, EvaluationDocument)> {
        self.evaluations.lock().unwrap().clone()
    }
}

impl ExperimentStore for MemoryStore {
    fn save_batch(&self, batch: &ExperimentBatch, path: &Path) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::io(
                path,
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            ));
        }
        self.saves
            .lock()
            .unwrap()
            .push((path.to_path_buf(), batch.clone()));
        Ok(())
    }

    fn load_batch(&self, path: &Path) -> Result<ExperimentBatch, StoreError> {
        self.loadable
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StoreError::NotFound(path.to_path_buf()))
    }

    fn save_evaluation(
        &self,
        document: &EvaluationDocument,
        path: &Path,
    ) -> Result<(), StoreError> {
        self.evaluations
            .lock()
            .unwrap()
            .push((path.to_path_buf(), document.clone()));
        Ok(())
    }
}
