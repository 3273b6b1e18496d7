//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("High-importance threshold must be greater than zero")]
    InvalidThreshold,

    #[error("Invalid AI timeout")]
    InvalidAiTimeout,

    #[error("AI temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Suggestion importance must be between 1 and 10")]
    InvalidSuggestionImportance,
}
