//! Survey graph domain.
//!
//! - [`question::QuestionNode`]: a branching or non-branching question
//! - [`graph::SurveyGraph`]: the questions of one survey
//! - [`validator::GraphValidator`]: activation-time safety checks

pub mod graph;
pub mod question;
pub mod validator;
