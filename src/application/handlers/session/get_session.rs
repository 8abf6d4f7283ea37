//! GetSessionHandler - Query handler for reading a session.

use std::sync::Arc;

use crate::domain::conversation::Session;
use crate::domain::foundation::SessionId;
use crate::ports::SessionRepository;

use super::SessionError;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving a session snapshot.
pub struct GetSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Returns a copy of the session. Waits for any in-flight message on
    /// the same session to finish first.
    pub async fn handle(&self, query: GetSessionQuery) -> Result<Session, SessionError> {
        self.repository
            .snapshot(&query.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(query.session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRepository;

    #[tokio::test]
    async fn returns_stored_session() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let session = Session::new();
        let id = *session.id();
        repo.insert(session).await.unwrap();

        let handler = GetSessionHandler::new(repo);
        let found = handler.handle(GetSessionQuery { session_id: id }).await.unwrap();

        assert_eq!(found.id(), &id);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = GetSessionHandler::new(Arc::new(InMemorySessionRepository::new()));
        let id = SessionId::new();

        let result = handler.handle(GetSessionQuery { session_id: id }).await;

        assert!(matches!(result, Err(SessionError::NotFound(missing)) if missing == id));
    }
}
