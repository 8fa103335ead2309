//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! where needed.

use navigator_application::NavigationParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("sessions.directory is required when sessions.store = \"json\"")]
    MissingSessionDirectory,

    #[error("logging.event_log cannot be empty")]
    EmptyEventLogPath,
}

/// Raw navigation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNavigationConfig {
    /// Refuse to start sessions on surveys that fail validation
    pub validate_before_start: bool,
}

impl Default for FileNavigationConfig {
    fn default() -> Self {
        Self {
            validate_before_start: true,
        }
    }
}

impl FileNavigationConfig {
    pub fn to_params(&self) -> NavigationParams {
        NavigationParams::default().with_validate_before_start(self.validate_before_start)
    }
}

/// Where traversal sessions are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStoreKind {
    /// In-process map, lost on exit
    #[default]
    Memory,
    /// One JSON file per response in `sessions.directory`
    Json,
}

/// Raw session store configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionsConfig {
    pub store: SessionStoreKind,
    /// Directory for the json store
    pub directory: Option<PathBuf>,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL navigation audit log; disabled when unset
    pub event_log: Option<PathBuf>,
}

/// Output format for reports and steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    #[default]
    Text,
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: FileOutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: FileOutputFormat::default(),
            color: true,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Navigation settings
    pub navigation: FileNavigationConfig,
    /// Session store settings
    pub sessions: FileSessionsConfig,
    /// Audit log settings
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.sessions.store == SessionStoreKind::Json && self.sessions.directory.is_none() {
            return Err(ConfigValidationError::MissingSessionDirectory);
        }

        if let Some(path) = &self.logging.event_log
            && path.as_os_str().is_empty()
        {
            return Err(ConfigValidationError::EmptyEventLogPath);
        }

        Ok(())
    }
}
