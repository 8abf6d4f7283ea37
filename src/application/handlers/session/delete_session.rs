//! DeleteSessionHandler - Command handler for closing a conversation.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::ports::SessionRepository;

use super::SessionError;

/// Command to delete a session and its transcript.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: SessionId,
}

/// Handler for deleting sessions.
pub struct DeleteSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl DeleteSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Removes the session. A message already in flight finishes against
    /// its own copy and is then discarded.
    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), SessionError> {
        if !self.repository.remove(&cmd.session_id).await? {
            return Err(SessionError::not_found(cmd.session_id));
        }

        tracing::info!(session_id = %cmd.session_id, "Session deleted");
        Ok(())
    }
}
