//! Infrastructure layer for survey-navigator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and survey file loading.

pub mod config;
pub mod logging;
pub mod session;
pub mod survey;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileNavigationConfig,
    FileOutputConfig, FileOutputFormat, FileSessionsConfig, SessionStoreKind,
};
pub use logging::JsonlNavigationLogger;
pub use session::{InMemorySessionStore, JsonFileSessionStore};
pub use survey::{LoadedSurvey, SurveyFileLoader, SurveyLoadError};
