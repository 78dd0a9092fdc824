//! Evaluate Debates use case
//!
//! Scores recorded debates on five axes with one evaluator call per axis and
//! compares the baseline group against the ensemble group.

use crate::config::{EvaluatorConfig, ResultPaths};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::experiment_store::{ExperimentStore, StoreError};
use crate::ports::model_gateway::{GenerationRequest, ModelGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use debate_domain::debate::argument::unix_seconds_now;
use debate_domain::{
    DebateEvaluation, EvaluationAxis, EvaluationDocument, EvaluationMetadata, EvaluationMetrics,
    EvaluationPrompt, ExperimentBatch, NEUTRAL_SCORE, RecordedDebate, UnitKind, compare_groups,
    parse_rating,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum EvaluateError {
    #[error("Failed to access evaluation files: {0}")]
    Store(#[from] StoreError),
}

/// Use case for scoring the debates of an experiment batch
pub struct EvaluateDebatesUseCase<G: ModelGateway + 'static> {
    gateway: Arc<G>,
    store: Arc<dyn ExperimentStore>,
    config: EvaluatorConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: ModelGateway + 'static> EvaluateDebatesUseCase<G> {
    pub fn new(gateway: Arc<G>, store: Arc<dyn ExperimentStore>, config: EvaluatorConfig) -> Self {
        Self {
            gateway,
            store,
            config,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Score one debate. Returns the metrics and the axes that fell back
    /// to the neutral score because the evaluator call failed.
    pub async fn evaluate_debate(
        &self,
        debate: &RecordedDebate,
    ) -> (EvaluationMetrics, Vec<EvaluationAxis>) {
        let result = debate.to_debate_result();
        let mut scores = [NEUTRAL_SCORE; 5];
        let mut failed = Vec::new();

        for (slot, axis) in scores.iter_mut().zip(EvaluationAxis::ALL) {
            let prompt = EvaluationPrompt::for_axis(axis, &result, &debate.scenario_focus);
            let request = GenerationRequest::new(self.config.evaluator_model.clone(), prompt);
            let outcome = self.gateway.try_generate(&request).await;

            self.conversation_logger.log(ConversationEvent::new(
                "evaluation_call",
                json!({
                    "model": self.config.evaluator_model.as_str(),
                    "axis": axis.as_str(),
                    "topic": debate.topic,
                    "success": outcome.is_ok(),
                }),
            ));

            match outcome {
                Ok(text) => *slot = parse_rating(&text),
                Err(e) => {
                    warn!("Evaluation of {} failed: {}", axis.as_str(), e);
                    failed.push(axis);
                }
            }
        }

        let [quality, alignment, depth, safety, coherence] = scores;
        (
            EvaluationMetrics::from_scores(quality, alignment, depth, safety, coherence),
            failed,
        )
    }

    /// Evaluate both groups of a batch and compute comparison statistics.
    pub async fn evaluate_batch(
        &self,
        batch: &ExperimentBatch,
        source_file: &str,
        progress: &dyn ProgressNotifier,
    ) -> EvaluationDocument {
        let baseline = self.select(batch, UnitKind::Baseline);
        let ensemble = self.select(batch, UnitKind::Ensemble);
        progress.on_evaluation_start(baseline.len() + ensemble.len());
        info!(
            "Evaluating {} baseline and {} ensemble debates with {}",
            baseline.len(),
            ensemble.len(),
            self.config.evaluator_model
        );

        let baseline_evaluations = self
            .evaluate_group(UnitKind::Baseline, &baseline, progress)
            .await;
        let ensemble_evaluations = self
            .evaluate_group(UnitKind::Ensemble, &ensemble, progress)
            .await;
        let comparison_statistics = compare_groups(&baseline_evaluations, &ensemble_evaluations);
        progress.on_evaluation_complete();

        EvaluationDocument {
            metadata: EvaluationMetadata {
                evaluator_model: self.config.evaluator_model.clone(),
                evaluation_timestamp: unix_seconds_now(),
                total_debates_evaluated: baseline_evaluations.len() + ensemble_evaluations.len(),
                source_file: source_file.to_string(),
            },
            baseline_evaluations,
            ensemble_evaluations,
            comparison_statistics,
        }
    }

    /// Load a batch file, evaluate it and write `{stem}_evaluation.json`
    /// beside it.
    pub async fn evaluate_file(
        &self,
        path: &Path,
    ) -> Result<(EvaluationDocument, PathBuf), EvaluateError> {
        self.evaluate_file_with_progress(path, &NoProgress).await
    }

    pub async fn evaluate_file_with_progress(
        &self,
        path: &Path,
        progress: &dyn ProgressNotifier,
    ) -> Result<(EvaluationDocument, PathBuf), EvaluateError> {
        let batch = self.store.load_batch(path)?;
        let document = self
            .evaluate_batch(&batch, &path.display().to_string(), progress)
            .await;

        let output = ResultPaths::evaluation_for(path);
        self.store.save_evaluation(&document, &output)?;
        info!("Evaluation results saved to {}", output.display());
        Ok((document, output))
    }

    async fn evaluate_group(
        &self,
        kind: UnitKind,
        debates: &[(&str, &RecordedDebate)],
        progress: &dyn ProgressNotifier,
    ) -> Vec<DebateEvaluation> {
        let mut evaluations = Vec::with_capacity(debates.len());
        for (index, (unit, debate)) in debates.iter().enumerate() {
            let (metrics, failed_axes) = self.evaluate_debate(debate).await;
            progress.on_debate_evaluated(kind, unit, failed_axes.len());
            evaluations.push(DebateEvaluation {
                debate_index: index,
                unit: unit.to_string(),
                topic: debate.topic.clone(),
                category: debate.scenario_category.clone(),
                metrics,
                failed_axes,
                ensemble_config: debate.ensemble_config.clone(),
            });
        }
        evaluations
    }

    /// Debates of one group to evaluate. With a sample limit, units take
    /// turns contributing their next debate until the limit is reached.
    fn select<'a>(
        &self,
        batch: &'a ExperimentBatch,
        kind: UnitKind,
    ) -> Vec<(&'a str, &'a RecordedDebate)> {
        let Some(limit) = self.config.sample else {
            return batch.debates(kind).collect();
        };

        let units: Vec<(&str, &Vec<RecordedDebate>)> = batch
            .results(kind)
            .iter()
            .map(|(unit, debates)| (unit.as_str(), debates))
            .collect();
        let deepest = units.iter().map(|(_, d)| d.len()).max().unwrap_or(0);

        (0..deepest)
            .flat_map(|depth| {
                units
                    .iter()
                    .filter_map(move |(unit, debates)| debates.get(depth).map(|d| (*unit, d)))
            })
            .take(limit)
            .collect()
    }
}
