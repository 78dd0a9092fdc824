//! Run Debate use case
//!
//! Drives one debate to completion: N rounds of proponent/opponent turns,
//! each seeing the transcript so far, then one judge turn over the full
//! transcript.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::model_gateway::{GenerationRequest, ModelGateway, text_or_sentinel};
use debate_domain::{
    Argument, DebatePrompt, DebateResult, DebateRole, DomainError, ModelId, RoleAssignment,
    Transcript, Winner,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

/// Errors that prevent a debate from starting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DebateError {
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Use case for running a single debate
pub struct RunDebateUseCase<G: ModelGateway + 'static> {
    gateway: Arc<G>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: ModelGateway + 'static> RunDebateUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Baseline debate: `model` plays every role.
    pub async fn run_single_model_debate(
        &self,
        model: &ModelId,
        topic: &str,
        rounds: u32,
    ) -> Result<DebateResult, DebateError> {
        self.run_debate(&RoleAssignment::single(model.clone()), topic, rounds)
            .await
    }

    /// Ensemble debate: each role played by its assigned model.
    pub async fn run_ensemble_debate(
        &self,
        assignment: &RoleAssignment,
        topic: &str,
        rounds: u32,
    ) -> Result<DebateResult, DebateError> {
        self.run_debate(assignment, topic, rounds).await
    }

    /// Run one debate.
    ///
    /// Gateway failures never abort the debate; the failed turn is recorded
    /// as sentinel text. Zero rounds yields only the judge turn.
    pub async fn run_debate(
        &self,
        assignment: &RoleAssignment,
        topic: &str,
        rounds: u32,
    ) -> Result<DebateResult, DebateError> {
        if topic.trim().is_empty() {
            return Err(DomainError::EmptyTopic.into());
        }
        assignment.validate()?;

        info!(
            "Starting debate ({} rounds, {}): {}",
            rounds, assignment, topic
        );
        let started = Instant::now();
        let mut transcript = Transcript::new();
        let mut arguments = Vec::with_capacity(2 * rounds as usize + 1);

        for round in 1..=rounds {
            for role in [DebateRole::Proponent, DebateRole::Opponent] {
                let model = assignment.model_for(role);
                let content = self
                    .turn(model, role, topic, transcript.context(), round)
                    .await;
                transcript.record(role, round, &content);
                arguments.push(Argument::new(role, model.clone(), content, round));
            }
        }

        let judge = assignment.model_for(DebateRole::Judge);
        let verdict = self
            .turn(
                judge,
                DebateRole::Judge,
                topic,
                &transcript.judge_context(),
                rounds + 1,
            )
            .await;
        arguments.push(Argument::new(
            DebateRole::Judge,
            judge.clone(),
            verdict.clone(),
            rounds + 1,
        ));

        let winner = Winner::from_judge_text(&verdict);
        let total_time = started.elapsed().as_secs_f64();
        info!("Debate finished in {:.1}s, winner: {}", total_time, winner);

        Ok(DebateResult {
            topic: topic.to_string(),
            arguments,
            winner,
            judge_reasoning: verdict,
            total_time,
            ensemble_used: assignment.is_ensemble(),
        })
    }

    async fn turn(
        &self,
        model: &ModelId,
        role: DebateRole,
        topic: &str,
        context: &str,
        round: u32,
    ) -> String {
        let request = GenerationRequest::new(model.clone(), DebatePrompt::turn(role, topic, context))
            .with_system(DebatePrompt::system(role, topic));
        debug!(
            "{} round {} -> {} ({} prompt chars)",
            role,
            round,
            model,
            request.prompt.len()
        );

        let started = Instant::now();
        let result = self.gateway.try_generate(&request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        self.conversation_logger.log(ConversationEvent::new(
            "model_call",
            json!({
                "model": model.as_str(),
                "role": role.as_str(),
                "round": round,
                "prompt_chars": request.prompt.len(),
                "response_chars": result.as_ref().map_or(0, |text| text.len()),
                "elapsed_ms": elapsed_ms,
                "success": result.is_ok(),
            }),
        ));

        text_or_sentinel(result, model)
    }
}
