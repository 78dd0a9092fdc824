//! Ollama model gateway implementation

use super::protocol::{GenerateRequest, GenerateResponse, SamplingOptions, TagsResponse};
use async_trait::async_trait;
use debate_application::{GatewayError, GenerationOptions, GenerationRequest, ModelGateway};
use debate_domain::ModelId;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Model gateway for a local Ollama server
///
/// One HTTP request per call, no retries. Every request carries the
/// configured timeout.
pub struct OllamaGateway {
    client: Client,
    base_url: String,
    options: GenerationOptions,
}

impl OllamaGateway {
    pub fn new(base_url: impl Into<String>, options: GenerationOptions) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| GatewayError::Connection(format!("Failed to build HTTP client: {}", e)))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        info!("OllamaGateway initialized for {}", base_url);
        Ok(Self {
            client,
            base_url,
            options,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_decode() {
        GatewayError::InvalidResponse(error.to_string())
    } else {
        GatewayError::Connection(error.to_string())
    }
}

async fn check_status(
    response: reqwest::Response,
    model: Option<&ModelId>,
) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, model, body))
}

/// A 404 naming a model means the model is not pulled on the server.
fn status_error(status: StatusCode, model: Option<&ModelId>, body: String) -> GatewayError {
    match model {
        Some(model) if status == StatusCode::NOT_FOUND => {
            GatewayError::ModelNotAvailable(model.to_string())
        }
        _ => GatewayError::Http {
            status: status.as_u16(),
            body,
        },
    }
}

#[async_trait]
impl ModelGateway for OllamaGateway {
    async fn try_generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        let body = GenerateRequest {
            model: request.model.as_str(),
            prompt: &request.prompt,
            system: request.system.as_deref(),
            stream: false,
            options: SamplingOptions::from(&self.options),
        };
        debug!(
            model = request.model.as_str(),
            prompt_chars = request.prompt.len(),
            "POST /api/generate"
        );

        let response = self
            .client
            .post(self.endpoint("/api/generate"))
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = check_status(response, Some(&request.model)).await?;

        let parsed: GenerateResponse = response.json().await.map_err(map_transport_error)?;
        Ok(parsed.response)
    }

    async fn available_models(&self) -> Result<Vec<ModelId>, GatewayError> {
        let response = self
            .client
            .get(self.endpoint("/api/tags"))
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = check_status(response, None).await?;

        let tags: TagsResponse = response.json().await.map_err(map_transport_error)?;
        Ok(tags.models.into_iter().map(|m| ModelId::new(m.name)).collect())
    }
}
