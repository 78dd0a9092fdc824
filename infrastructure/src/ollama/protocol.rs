//! JSON shapes of the Ollama HTTP API.
//!
//! - `POST /api/generate` with `stream: false` returns one object whose
//!   `response` field holds the full completion.
//! - `GET /api/tags` lists the installed models.

use debate_application::GenerationOptions;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<&'a str>,
    pub stream: bool,
    pub options: SamplingOptions,
}

/// Ollama `options` object
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingOptions {
    pub num_predict: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl From<&GenerationOptions> for SamplingOptions {
    fn from(options: &GenerationOptions) -> Self {
        Self {
            num_predict: options.max_tokens,
            temperature: options.temperature,
            top_p: options.top_p,
        }
    }
}

/// Non-streaming generate response. Only `response` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}

/// Body of `GET /api/tags`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelTag {
    pub name: String,
}
