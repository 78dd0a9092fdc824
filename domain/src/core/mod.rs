//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`]: identifier of a locally served model
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod string;
