//! Session Repository Port - Storage for live conversation sessions.

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::domain::conversation::Session;
use crate::domain::foundation::{DomainError, SessionId};

/// Port for session storage.
///
/// `lock` hands out exclusive access to one session, so messages for the
/// same session are processed strictly one after another. Locks on
/// different sessions never contend.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a new session.
    async fn insert(&self, session: Session) -> Result<(), DomainError>;

    /// Acquires exclusive access to a session.
    ///
    /// Returns `Ok(None)` if no session has this ID.
    async fn lock(&self, id: &SessionId) -> Result<Option<OwnedMutexGuard<Session>>, DomainError>;

    /// Returns a copy of the session's current state.
    async fn snapshot(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Drops a session.
    ///
    /// Returns `Ok(false)` if no session has this ID.
    async fn remove(&self, id: &SessionId) -> Result<bool, DomainError>;

    /// Number of stored sessions.
    async fn count(&self) -> usize;
}
