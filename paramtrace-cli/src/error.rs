//! Error types for paramtrace-cli

use thiserror::Error;

/// Result type alias for paramtrace-cli operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while loading and rendering a parameter document
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to parse parameter document: {0}")]
    ParseError(String),

    #[error("Invalid value for parameter {name}: {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] paramtrace::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::ParseError(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::ParseError(err.to_string())
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}
