//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VONIX` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use vonix::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}:{}", config.server.host, config.server.port);
//! ```

mod error;
mod generation;
mod scoring;
mod server;

pub use error::{ConfigError, ValidationError};
pub use generation::GenerationConfig;
pub use scoring::ScoringConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Conventional variable holding a HuggingFace access token.
pub const HF_TOKEN_VAR: &str = "HF_TOKEN";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat generation service
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Assessment scoring service
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VONIX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `HF_TOKEN` when no generation token is set
    ///
    /// # Environment Variable Format
    ///
    /// - `VONIX__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `VONIX__SCORING__URL=...` -> `scoring.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VONIX")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if !config.generation.has_token() {
            if let Ok(token) = std::env::var(HF_TOKEN_VAR) {
                config.generation.api_token = Some(token);
            }
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.generation.validate(&self.server.environment)?;
        self.scoring.validate()?;

        // One API request may wait on either outbound call.
        let request = self.server.request_timeout_secs;
        for (service, service_secs) in [
            ("generation", self.generation.timeout_secs),
            ("scoring", self.scoring.timeout_secs),
        ] {
            if request <= service_secs {
                return Err(ValidationError::RequestTimeoutTooShort {
                    request,
                    service,
                    service_secs,
                });
            }
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
