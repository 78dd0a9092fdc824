//! Presentation layer for ensemble-debates
//!
//! This crate contains CLI definitions, console formatters, the Markdown
//! evaluation report and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, EvaluateArgs, EvaluateFlag, RunArgs};
pub use output::console::ConsoleFormatter;
pub use output::report::EvaluationReport;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
