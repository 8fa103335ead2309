//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod activate_survey;
pub mod navigate_survey;
