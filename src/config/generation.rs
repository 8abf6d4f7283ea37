//! Text generation service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Chat generation service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Inference endpoint for the chat model
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token for the inference endpoint
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl GenerationConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a non-empty token is configured
    pub fn has_token(&self) -> bool {
        self.api_token.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Validate generation configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if !is_http_url(&self.api_url) {
            return Err(ValidationError::InvalidUrl("generation.api_url"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("generation"));
        }
        if *environment == Environment::Production && !self.has_token() {
            return Err(ValidationError::MissingRequired("VONIX__GENERATION__API_TOKEN"));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            timeout_secs: default_timeout(),
        }
    }
}

pub(super) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_api_url() -> String {
    "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta".to_string()
}

fn default_timeout() -> u64 {
    30
}
