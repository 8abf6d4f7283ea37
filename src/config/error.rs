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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address")]
    InvalidBindAddress,

    #[error("Invalid timeout for {0}")]
    InvalidTimeout(&'static str),

    #[error("Invalid URL for {0}: must start with http:// or https://")]
    InvalidUrl(&'static str),

    #[error("server.request_timeout_secs ({request}s) must exceed the {service} timeout ({service_secs}s)")]
    RequestTimeoutTooShort {
        request: u64,
        service: &'static str,
        service_secs: u64,
    },
}
