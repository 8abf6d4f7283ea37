//! Text Generator Port - Interface for the free-chat completion service.
//!
//! The generator is a plain completion model: it receives one assembled
//! prompt and returns the generated text, which usually echoes the prompt.
//! Extracting the assistant's reply is the caller's job.

use async_trait::async_trait;

use crate::domain::conversation::{CHAT_MAX_NEW_TOKENS, CHAT_TEMPERATURE};

/// Port for text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a continuation of the prompt.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;

    /// Short provider name for logs.
    fn name(&self) -> &str;
}

/// Request for a completion.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Fully assembled prompt.
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_new_tokens: u32,
}

impl GenerationRequest {
    /// Creates a chat request with the fixed chat parameters.
    pub fn chat(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: CHAT_TEMPERATURE,
            max_new_tokens: CHAT_MAX_NEW_TOKENS,
        }
    }
}

/// Text generation errors.
///
/// Variants that saw a response body keep it for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The service answered with an explicit error field.
    #[error("{message}")]
    Provider {
        /// Error text from the payload.
        message: String,
        /// Raw response body.
        raw_body: String,
    },

    /// The payload matched neither the success nor the error shape.
    #[error("Unknown format: {raw_body}")]
    UnknownFormat {
        /// Raw response body.
        raw_body: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },
}

impl GenerationError {
    /// Creates a provider error.
    pub fn provider(message: impl Into<String>, raw_body: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            raw_body: raw_body.into(),
        }
    }

    /// Creates an unknown format error.
    pub fn unknown_format(raw_body: impl Into<String>) -> Self {
        Self::UnknownFormat {
            raw_body: raw_body.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// The raw response body, if one was received.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Provider { raw_body, .. } | Self::UnknownFormat { raw_body } => Some(raw_body),
            Self::Network(_) | Self::Timeout { .. } => None,
        }
    }

    /// Renders the error as the assistant's reply.
    pub fn to_assistant_message(&self) -> String {
        match self.raw_body() {
            Some(raw) => format!("❌ Raw response:\n{}\n\nParsed error: {}", raw, self),
            None => format!("❌ Could not reach the chat service: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_uses_fixed_parameters() {
        let request = GenerationRequest::chat("User: hi\nAssistant:");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_new_tokens, 200);
    }

    #[test]
    fn unknown_format_message_embeds_raw_body() {
        let err = GenerationError::unknown_format(r#"{"weird":true}"#);
        let message = err.to_assistant_message();

        assert!(message.starts_with("❌ Raw response:\n{\"weird\":true}"));
        assert!(message.contains("Parsed error: Unknown format: {\"weird\":true}"));
    }

    #[test]
    fn provider_error_shows_message_and_body() {
        let body = r#"{"error":"Model is loading"}"#;
        let err = GenerationError::provider("Model is loading", body);

        assert_eq!(err.to_string(), "Model is loading");
        assert_eq!(err.raw_body(), Some(body));
        assert!(err.to_assistant_message().ends_with("Parsed error: Model is loading"));
    }

    #[test]
    fn transport_errors_have_no_body() {
        let err = GenerationError::Timeout { timeout_secs: 30 };
        assert_eq!(err.raw_body(), None);
        assert_eq!(
            err.to_assistant_message(),
            "❌ Could not reach the chat service: request timed out after 30s"
        );
    }
}
