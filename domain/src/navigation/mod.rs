//! Navigation domain.
//!
//! - [`determinant::NavigationDeterminant`]: go to a question, or end the survey
//! - [`answer::Answer`]: what a respondent submitted
//! - [`resolver::NavigationResolver`]: picks the determinant for an answer

pub mod answer;
pub mod determinant;
pub mod resolver;
