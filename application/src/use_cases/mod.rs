//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod evaluate_debates;
pub mod run_debate;
pub mod run_experiment;

#[cfg(test)]
mod test_support;
