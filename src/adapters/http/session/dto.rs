//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::ProcessMessageResult;
use crate::domain::assessment::{AssessmentResult, Dimension};
use crate::domain::conversation::{ConversationMode, Session, Speaker, TranscriptEntry};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to post a user message.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One transcript line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEntryResponse {
    pub id: String,
    pub speaker: Speaker,
    pub text: String,
    pub created_at: String,
}

impl From<&TranscriptEntry> for TranscriptEntryResponse {
    fn from(entry: &TranscriptEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            speaker: entry.speaker(),
            text: entry.text().to_string(),
            created_at: entry.created_at().to_rfc3339(),
        }
    }
}

/// Session view for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    pub mode: ConversationMode,
    pub cursor: usize,
    /// Size of the active question set; absent in chat mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<usize>,
    pub transcript: Vec<TranscriptEntryResponse>,
    pub created_at: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id().to_string(),
            mode: session.mode(),
            cursor: session.cursor(),
            total_questions: session.active_set().map(|set| set.len()),
            transcript: transcript_response(session),
            created_at: session.created_at().to_rfc3339(),
        }
    }
}

/// Builds the ordered transcript list for a session.
pub fn transcript_response(session: &Session) -> Vec<TranscriptEntryResponse> {
    session.transcript().iter().map(Into::into).collect()
}

/// Guidance for one dimension.
#[derive(Debug, Clone, Serialize)]
pub struct GuidanceResponse {
    pub dimension: Dimension,
    pub text: String,
}

/// Severity labels returned by the scorer.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub depression: String,
    pub anxiety: String,
    pub stress: String,
    pub guidance: Vec<GuidanceResponse>,
}

impl From<&AssessmentResult> for AssessmentResponse {
    fn from(result: &AssessmentResult) -> Self {
        Self {
            depression: result.depression.clone(),
            anxiety: result.anxiety.clone(),
            stress: result.stress.clone(),
            guidance: result
                .guidance()
                .into_iter()
                .map(|(dimension, text)| GuidanceResponse {
                    dimension,
                    text: text.to_string(),
                })
                .collect(),
        }
    }
}

/// Response to a posted message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub replies: Vec<String>,
    pub mode: ConversationMode,
    pub cursor: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<AssessmentResponse>,
}

impl From<ProcessMessageResult> for MessageResponse {
    fn from(result: ProcessMessageResult) -> Self {
        Self {
            assessment: result.assessment.as_ref().map(Into::into),
            replies: result.replies,
            mode: result.mode,
            cursor: result.cursor,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
