//! Assessment Scorer Port - Interface for the remote DASS scoring service.

use async_trait::async_trait;

use crate::domain::assessment::{AssessmentResult, NormalizedAnswers};

/// Port for scoring a completed questionnaire.
#[async_trait]
pub trait AssessmentScorer: Send + Sync {
    /// Scores answers already normalized to the 0-3 scale.
    async fn score(&self, answers: &NormalizedAnswers) -> Result<AssessmentResult, ScoringError>;
}

/// Scoring errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// The service parsed the request and reported a non-success status.
    #[error("{message}")]
    Rejected {
        /// Message field of the response.
        message: String,
    },

    /// Request failed outright or the response was unparseable.
    #[error("{0}")]
    Transport(String),
}

impl ScoringError {
    /// Creates a rejected error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates a transport error.
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }
}
