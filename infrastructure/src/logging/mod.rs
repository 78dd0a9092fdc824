//! Logging infrastructure: the JSONL model-call transcript.
//!
//! Provides [`JsonlConversationLogger`], which implements the
//! [`ConversationLogger`](debate_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
