//! HTTP listener settings

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest request timeout accepted, in seconds.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where and how the HTTP API listens.
///
/// Missing fields fall back to `ServerConfig::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Selects log format and whether a generation token is mandatory.
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Upper bound for one API request, outbound calls included.
    pub request_timeout_secs: u64,
}

/// Deployment environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// Parses `host:port` into a bindable address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout("server"));
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,vonix=debug".to_string(),
            request_timeout_secs: 60,
        }
    }
}
