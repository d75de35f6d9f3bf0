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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Maximum tickets per purchase must be at least 1")]
    InvalidTicketLimit,

    #[error("Maximum tickets per purchase exceeds maximum allowed (1000)")]
    TicketLimitTooLarge,

    #[error("Invalid log filter directive")]
    InvalidLogFilter,
}
