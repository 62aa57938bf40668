//! Configuration error types

use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying config crate failure (file parse, merge, deserialize)
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    /// Invalid environment variable value
    #[error("Environment variable error: {0}")]
    EnvVarError(String),

    /// A setting failed semantic validation
    #[error("Invalid configuration for '{key}': {reason}")]
    ValidationError { key: String, reason: String },
}
