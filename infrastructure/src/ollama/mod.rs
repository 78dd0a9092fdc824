//! Ollama adapter for the model gateway port.

pub mod gateway;
pub mod protocol;

pub use gateway::{DEFAULT_BASE_URL, OllamaGateway};
