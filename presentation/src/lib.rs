//! Presentation layer for survey-navigator
//!
//! This crate contains CLI definitions, output formatters,
//! answer input and the survey walk loop.

pub mod cli;
pub mod config;
pub mod input;
pub mod output;
pub mod walk;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::OutputConfig;
pub use input::answer::{
    AnswerParseError, AnswerSource, PromptAnswers, ScriptedAnswers, parse_answer,
};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::json::JsonFormatter;
pub use walk::{SurveyWalker, WalkError, WalkOutcome};
