//! Interactive and scripted survey walks

mod walker;

pub use walker::{SurveyWalker, WalkError, WalkOutcome};
