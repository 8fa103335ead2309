//! Domain layer for survey-navigator
//!
//! This crate contains the question graph model and the navigation rules.
//! It has no dependencies on infrastructure or presentation concerns and
//! performs no I/O.
//!
//! # Core Concepts
//!
//! ## Determinants
//!
//! After a question is answered, a [`NavigationDeterminant`] says where to go:
//! another question, or the end of the survey.
//!
//! ## Survey graphs
//!
//! - **Branching** questions route by the selected option
//! - **NonBranching** questions always use their default
//! - [`GraphValidator`] rejects graphs that could loop or never end
//!
//! ## Sessions
//!
//! [`NavigationResolver`] computes the next determinant for an answer and
//! [`TraversalGuard`] makes sure a live [`TraversalSession`] never shows a
//! question twice.

pub mod core;
pub mod navigation;
pub mod session;
pub mod survey;

// Re-export commonly used types
pub use self::core::{
    error::DomainError,
    ids::{OptionId, QuestionId, ResponseId, SurveyId},
};
pub use navigation::{
    answer::Answer,
    determinant::{DeterminantKind, NavigationDeterminant},
    resolver::{NavigationResolver, Resolution, ResolutionSource},
};
pub use session::{
    entities::{SessionState, TraversalSession},
    guard::{GuardDecision, TraversalGuard},
};
pub use survey::{
    graph::SurveyGraph,
    question::{OptionEdge, QuestionKind, QuestionNode},
    validator::{
        CycleDetection, GraphValidator, IssueCode, Severity, ValidationIssue, ValidationReport,
    },
};
