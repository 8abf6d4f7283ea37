//! SendMessageHandler - Command handler for posting a user message to a
//! session.
//!
//! Holds the session's lock for the whole exchange, including any calls to
//! the generation or scoring services. The message is processed against a
//! working copy that replaces the stored session only once processing has
//! finished; a request dropped midway leaves the session as it was.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::ports::SessionRepository;

use super::super::conversation::{ProcessMessageHandler, ProcessMessageResult};
use super::SessionError;

/// Command to send a message.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub session_id: SessionId,
    pub content: String,
}

/// Handler for sending messages.
pub struct SendMessageHandler {
    repository: Arc<dyn SessionRepository>,
    processor: ProcessMessageHandler,
}

impl SendMessageHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, processor: ProcessMessageHandler) -> Self {
        Self {
            repository,
            processor,
        }
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<ProcessMessageResult, SessionError> {
        let mut guard = self
            .repository
            .lock(&cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        let mut working = guard.clone();
        let result = self.processor.handle(&mut working, &cmd.content).await?;
        *guard = working;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockTextGenerator;
    use crate::adapters::scoring::MockAssessmentScorer;
    use crate::adapters::storage::InMemorySessionRepository;
    use crate::domain::conversation::{ConversationMode, Session};

    struct Fixture {
        repo: Arc<InMemorySessionRepository>,
        generator: MockTextGenerator,
        handler: SendMessageHandler,
        session_id: SessionId,
    }

    async fn fixture() -> Fixture {
        let repo = Arc::new(InMemorySessionRepository::new());
        let generator = MockTextGenerator::new();
        let processor = ProcessMessageHandler::new(
            Arc::new(generator.clone()),
            Arc::new(MockAssessmentScorer::new()),
        );
        let session = Session::new();
        let session_id = *session.id();
        repo.insert(session).await.unwrap();

        Fixture {
            handler: SendMessageHandler::new(repo.clone(), processor),
            repo,
            generator,
            session_id,
        }
    }

    fn command(session_id: SessionId, content: &str) -> SendMessageCommand {
        SendMessageCommand {
            session_id,
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn state_change_is_committed() {
        let f = fixture().await;

        let result = f.handler.handle(command(f.session_id, "1")).await.unwrap();

        assert_eq!(result.mode, ConversationMode::ShortAssessment);
        let stored = f.repo.snapshot(&f.session_id).await.unwrap().unwrap();
        assert_eq!(stored.mode(), ConversationMode::ShortAssessment);
        assert_eq!(stored.transcript().len(), 3);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let f = fixture().await;

        let result = f.handler.handle(command(SessionId::new(), "hello")).await;

        assert!(matches!(result, Err(SessionError::NotFound(_))));
        assert_eq!(f.generator.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_message_leaves_session_untouched() {
        let f = fixture().await;

        let result = f.handler.handle(command(f.session_id, "  ")).await;

        assert!(matches!(result, Err(SessionError::EmptyMessage)));
        let stored = f.repo.snapshot(&f.session_id).await.unwrap().unwrap();
        assert_eq!(stored.transcript().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_messages_are_serialized() {
        let f = fixture().await;
        let handler = Arc::new(f.handler);

        let tasks: Vec<_> = (0..5)
            .map(|i| {
                let handler = handler.clone();
                let id = f.session_id;
                tokio::spawn(async move { handler.handle(command(id, &format!("msg {}", i))).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = f.repo.snapshot(&f.session_id).await.unwrap().unwrap();
        assert_eq!(stored.transcript().len(), 1 + 5 * 2);
        assert_eq!(f.generator.call_count(), 5);
    }
}
