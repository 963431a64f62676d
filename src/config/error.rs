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
    #[error("Cycle set '{0}' must contain at least one count")]
    EmptyCycleSet(&'static str),

    #[error("Fall-asleep latency must be between 0 and {max} minutes, got {actual}")]
    LatencyOutOfRange { max: i64, actual: i64 },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
