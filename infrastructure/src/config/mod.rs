//! Configuration file loading for survey-navigator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NAVIGATOR_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./navigator.toml` or `./.navigator.toml`
//! 4. Global: `$XDG_CONFIG_HOME/survey-navigator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileNavigationConfig, FileOutputConfig,
    FileOutputFormat, FileSessionsConfig, SessionStoreKind,
};
pub use loader::ConfigLoader;
