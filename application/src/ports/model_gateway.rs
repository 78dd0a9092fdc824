//! Model Gateway port
//!
//! Defines the interface for sending a single prompt to a locally served
//! model.

use async_trait::async_trait;
use debate_domain::ModelId;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during a generation call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),
}

impl GatewayError {
    /// The visible error text that stands in for a failed turn.
    pub fn sentinel(&self, model: &ModelId) -> String {
        match self {
            GatewayError::Timeout => {
                format!("Error: Timeout generating response from {}", model)
            }
            other => format!(
                "Error: Could not generate response from {} ({})",
                model, other
            ),
        }
    }
}

/// One prompt for one model
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: ModelId,
    pub prompt: String,
    pub system: Option<String>,
}

impl GenerationRequest {
    pub fn new(model: ModelId, prompt: impl Into<String>) -> Self {
        Self {
            model,
            prompt: prompt.into(),
            system: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Gateway for model generation
///
/// Adapters implement [`try_generate`](ModelGateway::try_generate); callers
/// that must never fail use [`generate`](ModelGateway::generate).
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send one prompt and return the generated text
    async fn try_generate(&self, request: &GenerationRequest) -> Result<String, GatewayError>;

    /// List models installed on the serving endpoint
    async fn available_models(&self) -> Result<Vec<ModelId>, GatewayError>;

    /// Infallible generation: failures are logged and returned as sentinel text.
    async fn generate(&self, model: &ModelId, prompt: &str, system: Option<&str>) -> String {
        let mut request = GenerationRequest::new(model.clone(), prompt);
        request.system = system.map(str::to_string);
        text_or_sentinel(self.try_generate(&request).await, model)
    }
}

/// Collapse a generation result into turn text.
pub fn text_or_sentinel(result: Result<String, GatewayError>, model: &ModelId) -> String {
    result.unwrap_or_else(|e| {
        warn!("Generation with {} failed: {}", model, e);
        e.sentinel(model)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_sentinel() {
        let model = ModelId::from("phi3:3.8b");
        assert_eq!(
            GatewayError::Timeout.sentinel(&model),
            "Error: Timeout generating response from phi3:3.8b"
        );
    }

    #[test]
    fn test_other_sentinel_embeds_reason() {
        let model = ModelId::from("mistral:7b");
        let error = GatewayError::Connection("connection refused".to_string());
        assert_eq!(
            error.sentinel(&model),
            "Error: Could not generate response from mistral:7b (Connection error: connection refused)"
        );
    }

    struct FailingGateway;

    #[async_trait]
    impl ModelGateway for FailingGateway {
        async fn try_generate(&self, _request: &GenerationRequest) -> Result<String, GatewayError> {
            Err(GatewayError::Timeout)
        }

        async fn available_models(&self) -> Result<Vec<ModelId>, GatewayError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_generate_never_fails() {
        let text = FailingGateway
            .generate(&ModelId::from("m"), "prompt", Some("system"))
            .await;
        assert_eq!(text, "Error: Timeout generating response from m");
    }
}
