//! Survey document loading

mod loader;

pub use loader::{LoadedSurvey, SurveyFileLoader, SurveyLoadError};
