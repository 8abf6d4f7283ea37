//! HuggingFace Generator - Implementation of TextGenerator for the hosted
//! inference API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HuggingFaceConfig::new(api_url)
//!     .with_token(token)
//!     .with_timeout(Duration::from_secs(30));
//!
//! let generator = HuggingFaceGenerator::new(config)?;
//! ```
//!
//! # Response shapes
//!
//! The service answers with one of two JSON shapes, independent of the HTTP
//! status code:
//!
//! - success: `[{"generated_text": "..."}]`
//! - failure: `{"error": "..."}`
//!
//! Anything else is reported as an unknown format with the raw body attached.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::ports::{GenerationError, GenerationRequest, TextGenerator};

/// Default inference endpoint.
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta";

/// Configuration for the HuggingFace generator.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// Full model endpoint URL.
    pub api_url: String,
    /// Bearer token, if the endpoint requires one.
    token: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl HuggingFaceConfig {
    /// Creates a configuration for the given endpoint.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(Secret::new(token.into()));
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a token is configured.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret().as_str())
    }
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// HuggingFace inference API client.
pub struct HuggingFaceGenerator {
    config: HuggingFaceConfig,
    client: Client,
}

impl HuggingFaceGenerator {
    /// Creates a new generator.
    ///
    /// # Errors
    ///
    /// Returns `Network` if the HTTP client cannot be constructed.
    pub fn new(config: HuggingFaceConfig) -> Result<Self, GenerationError> {
        // No idle connections kept between calls.
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| GenerationError::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn map_transport_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            GenerationError::network(format!("Connection failed: {}", e))
        } else {
            GenerationError::network(e.to_string())
        }
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let payload = InferenceRequest::from(&request);

        let mut builder = self.client.post(&self.config.api_url).json(&payload);
        if let Some(token) = self.config.token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        tracing::debug!(
            status = status.as_u16(),
            body_len = body.len(),
            "Inference response received"
        );

        parse_generation_body(&body)
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    temperature: f32,
    max_new_tokens: u32,
}

impl<'a> From<&'a GenerationRequest> for InferenceRequest<'a> {
    fn from(request: &'a GenerationRequest) -> Self {
        Self {
            inputs: &request.prompt,
            parameters: InferenceParameters {
                temperature: request.temperature,
                max_new_tokens: request.max_new_tokens,
            },
        }
    }
}

/// Classifies an inference response body.
///
/// Returns the generated text of the first element for the success shape.
pub fn parse_generation_body(body: &str) -> Result<String, GenerationError> {
    let value: Value =
        serde_json::from_str(body).map_err(|_| GenerationError::unknown_format(body))?;

    match &value {
        Value::Array(items) => items
            .first()
            .and_then(|first| first.get("generated_text"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| GenerationError::unknown_format(body)),
        Value::Object(map) => match map.get("error") {
            Some(Value::String(message)) => Err(GenerationError::provider(message.clone(), body)),
            Some(other) => Err(GenerationError::provider(other.to_string(), body)),
            None => Err(GenerationError::unknown_format(body)),
        },
        _ => Err(GenerationError::unknown_format(body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod config {
        use super::*;

        #[test]
        fn defaults_to_zephyr_endpoint() {
            let config = HuggingFaceConfig::default();
            assert!(config.api_url.ends_with("HuggingFaceH4/zephyr-7b-beta"));
            assert!(!config.has_token());
            assert_eq!(config.timeout, Duration::from_secs(30));
        }

        #[test]
        fn builder_sets_token_and_timeout() {
            let config = HuggingFaceConfig::new("http://localhost:9000/model")
                .with_token("hf_secret")
                .with_timeout(Duration::from_secs(5));

            assert!(config.has_token());
            assert_eq!(config.token(), Some("hf_secret"));
            assert_eq!(config.timeout, Duration::from_secs(5));
        }

        #[test]
        fn debug_output_hides_token() {
            let config = HuggingFaceConfig::default().with_token("hf_secret");
            assert!(!format!("{:?}", config).contains("hf_secret"));
        }
    }

    mod wire {
        use super::*;

        #[test]
        fn request_carries_prompt_and_parameters() {
            let request = GenerationRequest::chat("User: hi\nAssistant:");
            let json = serde_json::to_value(InferenceRequest::from(&request)).unwrap();

            assert_eq!(json["inputs"], "User: hi\nAssistant:");
            assert_eq!(json["parameters"]["max_new_tokens"], 200);
            let temperature = json["parameters"]["temperature"].as_f64().unwrap();
            assert!((temperature - 0.7).abs() < 1e-6);
        }
    }

    mod parse {
        use super::*;

        #[test]
        fn success_shape_returns_generated_text() {
            let body = r#"[{"generated_text":"User: hi\nAssistant: Hello!"}]"#;
            assert_eq!(
                parse_generation_body(body).unwrap(),
                "User: hi\nAssistant: Hello!"
            );
        }

        #[test]
        fn only_first_element_is_used() {
            let body = r#"[{"generated_text":"first"},{"generated_text":"second"}]"#;
            assert_eq!(parse_generation_body(body).unwrap(), "first");
        }

        #[test]
        fn error_shape_is_provider_error() {
            let body = r#"{"error":"Model HuggingFaceH4/zephyr-7b-beta is currently loading"}"#;
            let err = parse_generation_body(body).unwrap_err();

            assert_eq!(
                err,
                GenerationError::provider(
                    "Model HuggingFaceH4/zephyr-7b-beta is currently loading",
                    body
                )
            );
        }

        #[test]
        fn non_string_error_is_still_provider_error() {
            let body = r#"{"error":["bad input"]}"#;
            assert!(matches!(
                parse_generation_body(body),
                Err(GenerationError::Provider { .. })
            ));
        }

        #[test]
        fn empty_array_is_unknown_format() {
            assert_eq!(
                parse_generation_body("[]").unwrap_err(),
                GenerationError::unknown_format("[]")
            );
        }

        #[test]
        fn object_without_error_is_unknown_format() {
            let body = r#"{"estimated_time":20.0}"#;
            assert_eq!(
                parse_generation_body(body).unwrap_err(),
                GenerationError::unknown_format(body)
            );
        }

        #[test]
        fn invalid_json_is_unknown_format() {
            let body = "<html>Bad Gateway</html>";
            let err = parse_generation_body(body).unwrap_err();
            assert_eq!(err.raw_body(), Some(body));
        }
    }
}
