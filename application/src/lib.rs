//! Application layer for survey-navigator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::NavigationParams;
pub use ports::{
    navigation_logger::{NavigationEvent, NavigationLogger, NoNavigationLogger},
    session_store::{SessionStore, SessionStoreError},
};
pub use use_cases::activate_survey::{ActivateSurveyError, ActivateSurveyUseCase};
pub use use_cases::navigate_survey::{NavigateSurveyError, NavigateSurveyUseCase, NavigationStep};
