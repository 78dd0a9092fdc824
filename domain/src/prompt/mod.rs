//! Prompt domain
//!
//! Templates for debate turns and for the evaluator's scoring calls.

mod debate;
mod evaluation;

pub use debate::DebatePrompt;
pub use evaluation::EvaluationPrompt;
