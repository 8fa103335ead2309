//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for reports and navigation steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable, colored when the terminal allows it
    #[default]
    Text,
    /// Pretty printed JSON
    Json,
}

/// CLI arguments for survey-navigator
#[derive(Parser, Debug)]
#[command(name = "survey-navigator")]
#[command(author, version, about = "Conditional navigation engine for surveys")]
#[command(long_about = r#"
survey-navigator checks that a survey's branching rules are safe and walks
respondents through it, one answer at a time.

A survey is safe when following its determinants can never loop back to a
question already shown, at least one question ends the survey, and every
target question exists. Unsafe surveys are refused before any respondent
sees them.

Configuration files are loaded from (in priority order):
1. NAVIGATOR_* environment variables
2. --config <path>         Explicit config file
3. ./navigator.toml        Project-level config
4. ~/.config/survey-navigator/config.toml   Global config

Example:
  survey-navigator validate feedback.toml
  survey-navigator walk feedback.toml --answer 11 --answer "text:A bike"
  survey-navigator resume feedback.toml 3
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a survey and print the report; exits non-zero when unsafe
    Validate {
        /// Survey document (.toml or .json)
        file: PathBuf,
    },

    /// Start a new session and walk it until it ends or answers run out
    Walk {
        /// Survey document (.toml or .json)
        file: PathBuf,

        /// Answer for the next question: option id(s) like `2` or `2,3`,
        /// `text:<free text>`, or `-` for no answer. Read from stdin when
        /// none are given.
        #[arg(short, long, value_name = "ANSWER")]
        answer: Vec<String>,
    },

    /// Continue a persisted session
    Resume {
        /// Survey document (.toml or .json)
        file: PathBuf,

        /// Response id printed when the session started
        response_id: i64,

        /// Answers, as for `walk`
        #[arg(short, long, value_name = "ANSWER")]
        answer: Vec<String>,
    },

    /// Show configuration file locations and the effective configuration
    ShowConfig,
}
