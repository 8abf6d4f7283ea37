//! Scoring service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::generation::is_http_url;

/// DASS prediction service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Prediction endpoint
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ScoringConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.url) {
            return Err(ValidationError::InvalidUrl("scoring.url"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("scoring"));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_url() -> String {
    "https://vonix-dass-chatbot.onrender.com/predict".to_string()
}

fn default_timeout() -> u64 {
    30
}
