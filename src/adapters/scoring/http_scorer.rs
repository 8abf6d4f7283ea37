//! HTTP Assessment Scorer - posts normalized answers to the DASS prediction
//! service.
//!
//! The request body is a flat JSON object of item id to 0-3 value. The
//! response carries a `status` field; `"success"` comes with a `result`
//! object holding the three severity labels, anything else with a `message`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::domain::assessment::{AssessmentResult, NormalizedAnswers};
use crate::ports::{AssessmentScorer, ScoringError};

/// Default prediction endpoint.
pub const DEFAULT_SCORING_URL: &str = "https://vonix-dass-chatbot.onrender.com/predict";

/// Configuration for the HTTP scorer.
#[derive(Debug, Clone)]
pub struct HttpScorerConfig {
    /// Prediction endpoint URL.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpScorerConfig {
    /// Creates a configuration for the given endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for HttpScorerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SCORING_URL)
    }
}

/// Scorer backed by the remote prediction service.
pub struct HttpAssessmentScorer {
    config: HttpScorerConfig,
    client: Client,
}

impl HttpAssessmentScorer {
    /// Creates a new scorer.
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the HTTP client cannot be constructed.
    pub fn new(config: HttpScorerConfig) -> Result<Self, ScoringError> {
        // No idle connections kept between calls.
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ScoringError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl AssessmentScorer for HttpAssessmentScorer {
    async fn score(&self, answers: &NormalizedAnswers) -> Result<AssessmentResult, ScoringError> {
        let response = self
            .client
            .post(&self.config.url)
            .json(answers)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ScoringError::transport(format!(
                        "request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    ScoringError::transport(e.to_string())
                }
            })?;

        tracing::debug!(status = response.status().as_u16(), "Scoring response received");

        let body = response
            .text()
            .await
            .map_err(|e| ScoringError::transport(e.to_string()))?;

        parse_scoring_body(&body)
    }
}

/// Interprets a prediction service response body.
pub fn parse_scoring_body(body: &str) -> Result<AssessmentResult, ScoringError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ScoringError::transport(format!("invalid response body: {}", e)))?;

    let status = value
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| ScoringError::transport("response missing 'status'"))?;

    if status != "success" {
        return match value.get("message") {
            Some(Value::String(message)) => Err(ScoringError::rejected(message.clone())),
            Some(other) => Err(ScoringError::rejected(other.to_string())),
            None => Err(ScoringError::transport("response missing 'message'")),
        };
    }

    let result = value
        .get("result")
        .ok_or_else(|| ScoringError::transport("response missing 'result'"))?;

    Ok(AssessmentResult::new(
        label(result, "depression")?,
        label(result, "anxiety")?,
        label(result, "stress")?,
    ))
}

fn label(result: &Value, key: &str) -> Result<String, ScoringError> {
    match result.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => Err(ScoringError::transport(format!(
            "result missing '{}'",
            key
        ))),
        Some(other) => Ok(other.to_string()),
    }
}
