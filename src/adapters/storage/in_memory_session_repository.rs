//! In-Memory Session Repository
//!
//! Sessions live only as long as the process. Each session sits behind its
//! own mutex, so a slow message in one session never blocks another.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::domain::conversation::Session;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::SessionRepository;

/// In-memory storage for live sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>>,
}

impl InMemorySessionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    async fn entry(&self, id: &SessionId) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().await.get(id).cloned()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Session {} already exists", session.id()),
            ));
        }
        sessions.insert(*session.id(), Arc::new(Mutex::new(session)));
        Ok(())
    }

    async fn lock(&self, id: &SessionId) -> Result<Option<OwnedMutexGuard<Session>>, DomainError> {
        // Release the map lock before waiting on the session itself.
        let Some(entry) = self.entry(id).await else {
            return Ok(None);
        };
        Ok(Some(entry.lock_owned().await))
    }

    async fn snapshot(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let Some(entry) = self.entry(id).await else {
            return Ok(None);
        };
        let session = entry.lock().await;
        Ok(Some(session.clone()))
    }

    async fn remove(&self, id: &SessionId) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::QuestionSet;
    use crate::domain::conversation::ConversationMode;
    use std::time::Duration;

    #[tokio::test]
    async fn insert_then_snapshot() {
        let repo = InMemorySessionRepository::new();
        let session = Session::new();
        let id = *session.id();

        repo.insert(session).await.unwrap();

        let stored = repo.snapshot(&id).await.unwrap().unwrap();
        assert_eq!(stored.id(), &id);
        assert_eq!(stored.transcript().len(), 1);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn unknown_id_returns_none() {
        let repo = InMemorySessionRepository::new();
        let id = SessionId::new();

        assert!(repo.snapshot(&id).await.unwrap().is_none());
        assert!(repo.lock(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let repo = InMemorySessionRepository::new();
        let id = SessionId::new();

        repo.insert(Session::with_id(id)).await.unwrap();
        let result = repo.insert(Session::with_id(id)).await;

        assert!(result.is_err());
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn mutations_through_lock_are_visible() {
        let repo = InMemorySessionRepository::new();
        let session = Session::new();
        let id = *session.id();
        repo.insert(session).await.unwrap();

        {
            let mut guard = repo.lock(&id).await.unwrap().unwrap();
            guard.begin_assessment(QuestionSet::Short).unwrap();
        }

        let stored = repo.snapshot(&id).await.unwrap().unwrap();
        assert_eq!(stored.mode(), ConversationMode::ShortAssessment);
    }

    #[tokio::test]
    async fn remove_drops_only_that_session() {
        let repo = InMemorySessionRepository::new();
        let kept = Session::new();
        let dropped = Session::new();
        let (kept_id, dropped_id) = (*kept.id(), *dropped.id());
        repo.insert(kept).await.unwrap();
        repo.insert(dropped).await.unwrap();

        assert!(repo.remove(&dropped_id).await.unwrap());

        assert!(repo.snapshot(&dropped_id).await.unwrap().is_none());
        assert!(repo.snapshot(&kept_id).await.unwrap().is_some());
        assert_eq!(repo.count().await, 1);
        assert!(!repo.remove(&dropped_id).await.unwrap());
    }

    #[tokio::test]
    async fn remove_does_not_wait_for_held_lock() {
        let repo = InMemorySessionRepository::new();
        let session = Session::new();
        let id = *session.id();
        repo.insert(session).await.unwrap();

        let held = repo.lock(&id).await.unwrap().unwrap();
        let removed = tokio::time::timeout(Duration::from_millis(50), repo.remove(&id)).await;

        assert!(matches!(removed, Ok(Ok(true))));
        drop(held);
        assert!(repo.lock(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lock_is_exclusive_per_session() {
        let repo = InMemorySessionRepository::new();
        let first = Session::new();
        let second = Session::new();
        let (first_id, second_id) = (*first.id(), *second.id());
        repo.insert(first).await.unwrap();
        repo.insert(second).await.unwrap();

        let held = repo.lock(&first_id).await.unwrap().unwrap();

        let blocked = tokio::time::timeout(Duration::from_millis(50), repo.lock(&first_id)).await;
        assert!(blocked.is_err());

        let other = tokio::time::timeout(Duration::from_millis(50), repo.lock(&second_id)).await;
        assert!(other.is_ok());

        drop(held);
        assert!(repo.lock(&first_id).await.unwrap().is_some());
    }
}
