//! Core domain concepts shared across all subdomains.
//!
//! - [`ids`]: integer identifiers for questions, options, surveys and responses
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod ids;
