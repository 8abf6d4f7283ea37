//! Errors surfaced by session handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};

use super::super::conversation::ProcessMessageError;

/// Session handler errors.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// No session has this ID.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// The message was blank.
    #[error("Message content cannot be empty")]
    EmptyMessage,

    /// Storage or domain failure.
    #[error("{0}")]
    Domain(DomainError),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        Self::NotFound(id)
    }

    /// Stable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::SessionNotFound,
            Self::EmptyMessage => ErrorCode::EmptyField,
            Self::Domain(err) => err.code(),
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ProcessMessageError> for SessionError {
    fn from(err: ProcessMessageError) -> Self {
        match err {
            ProcessMessageError::EmptyContent => Self::EmptyMessage,
            ProcessMessageError::Domain(err) => Self::Domain(err),
        }
    }
}
