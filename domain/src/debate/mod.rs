//! Debate domain
//!
//! Types for a single debate: who argues ([`RoleAssignment`]), what was said
//! ([`Argument`], [`Transcript`]), and how it ended ([`Winner`],
//! [`DebateResult`]).
//!
//! ```text
//! round 1..=N:  proponent ──▶ opponent      (each sees the transcript so far)
//! round N+1:    judge                       (sees the full transcript)
//! ```

pub mod argument;
pub mod assignment;
pub mod result;
pub mod role;
pub mod transcript;
pub mod verdict;

pub use argument::Argument;
pub use assignment::RoleAssignment;
pub use result::DebateResult;
pub use role::DebateRole;
pub use transcript::Transcript;
pub use verdict::Winner;
