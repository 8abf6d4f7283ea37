//! CreateSessionHandler - Command handler for opening a conversation.

use std::sync::Arc;

use crate::domain::conversation::Session;
use crate::ports::SessionRepository;

use super::SessionError;

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateSessionResult {
    pub session: Session,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Creates a session in chat mode with the greeting already posted.
    pub async fn handle(&self) -> Result<CreateSessionResult, SessionError> {
        let session = Session::new();
        self.repository.insert(session.clone()).await?;

        tracing::info!(session_id = %session.id(), "Session created");

        Ok(CreateSessionResult { session })
    }
}
