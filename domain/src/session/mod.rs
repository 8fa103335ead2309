//! Traversal session domain.
//!
//! - [`entities::TraversalSession`]: one respondent's run through a survey
//! - [`guard::TraversalGuard`]: visited-set tracking and repeat termination

pub mod entities;
pub mod guard;
