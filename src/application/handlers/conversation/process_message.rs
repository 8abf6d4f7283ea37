//! ProcessMessage handler: the conversational state machine.
//!
//! Consumes one user message against a session and produces the assistant's
//! replies. Free chat goes to the text generator; questionnaire answers are
//! recorded until the set is complete, then scored remotely.
//!
//! Service failures never escape this handler. Each one ends up as an
//! assistant message and the session stays interactive.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::assessment::{normalize_answers, AssessmentResult};
use crate::domain::conversation::{
    build_chat_prompt, extract_reply, replies, AnswerOutcome, ConversationMode, Intent, Session,
};
use crate::domain::foundation::DomainError;
use crate::ports::{AssessmentScorer, GenerationRequest, ScoringError, TextGenerator};

/// Errors that can occur when processing a message.
#[derive(Debug, Clone, Error)]
pub enum ProcessMessageError {
    /// Message content is empty or whitespace only.
    #[error("Validation error: message content cannot be empty")]
    EmptyContent,

    /// Domain error.
    #[error("Domain error: {0}")]
    Domain(DomainError),
}

impl From<DomainError> for ProcessMessageError {
    fn from(err: DomainError) -> Self {
        ProcessMessageError::Domain(err)
    }
}

/// Result of processing one message.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessMessageResult {
    /// Assistant messages appended for this user message, in order.
    pub replies: Vec<String>,
    /// Mode after processing.
    pub mode: ConversationMode,
    /// Cursor after processing.
    pub cursor: usize,
    /// Scorer result, when this message completed an assessment successfully.
    pub assessment: Option<AssessmentResult>,
}

/// Handler that advances a session by one user message.
#[derive(Clone)]
pub struct ProcessMessageHandler {
    generator: Arc<dyn TextGenerator>,
    scorer: Arc<dyn AssessmentScorer>,
}

impl ProcessMessageHandler {
    /// Creates a new handler with the given services.
    pub fn new(generator: Arc<dyn TextGenerator>, scorer: Arc<dyn AssessmentScorer>) -> Self {
        Self { generator, scorer }
    }

    /// Processes one user message.
    ///
    /// The user's message is appended to the transcript before it is
    /// interpreted.
    ///
    /// # Errors
    ///
    /// - `EmptyContent` if the message is blank; the session is untouched
    pub async fn handle(
        &self,
        session: &mut Session,
        content: &str,
    ) -> Result<ProcessMessageResult, ProcessMessageError> {
        if content.trim().is_empty() {
            return Err(ProcessMessageError::EmptyContent);
        }

        let intent = session.classify(content);
        let history_len = session.transcript().len();
        session.record_user_message(content);

        tracing::debug!(
            session_id = %session.id(),
            mode = ?session.mode(),
            cursor = session.cursor(),
            intent = ?intent,
            "Processing user message"
        );

        let mut assessment = None;
        match intent {
            Intent::BeginAssessment(set) => {
                let first = session.begin_assessment(set)?;
                session.record_assistant_message(replies::assessment_started(set, first));
                tracing::info!(session_id = %session.id(), set = set.label(), "Assessment started");
            }
            Intent::Chat => {
                let reply = self.chat_reply(session, history_len, content).await;
                session.record_assistant_message(reply);
            }
            Intent::Answer(answer) => match session.record_answer(answer) {
                AnswerOutcome::Next { number, question } => {
                    session.record_assistant_message(replies::question_prompt(number, question));
                }
                AnswerOutcome::Completed => {
                    assessment = self.complete_assessment(session).await;
                }
                AnswerOutcome::Rejected => {
                    session.record_assistant_message(replies::INVALID_ANSWER);
                }
            },
            Intent::InvalidAnswer => {
                session.record_assistant_message(replies::INVALID_ANSWER);
            }
        }

        let replies = session
            .transcript()
            .since(history_len + 1)
            .iter()
            .map(|entry| entry.text().to_string())
            .collect();

        Ok(ProcessMessageResult {
            replies,
            mode: session.mode(),
            cursor: session.cursor(),
            assessment,
        })
    }

    /// Asks the generator for a chat reply; failures become the reply.
    async fn chat_reply(&self, session: &Session, history_len: usize, content: &str) -> String {
        let history = &session.transcript().entries()[..history_len];
        let request = GenerationRequest::chat(build_chat_prompt(history, content));

        match self.generator.generate(request).await {
            Ok(generated) => extract_reply(&generated),
            Err(e) => {
                tracing::warn!(
                    session_id = %session.id(),
                    provider = self.generator.name(),
                    "Text generation failed: {}",
                    e
                );
                e.to_assistant_message()
            }
        }
    }

    /// Scores the completed set, reports the outcome, and returns to chat.
    async fn complete_assessment(&self, session: &mut Session) -> Option<AssessmentResult> {
        let normalized = normalize_answers(session.answers());
        tracing::info!(
            session_id = %session.id(),
            answers = normalized.len(),
            "Submitting assessment for scoring"
        );

        let result = match self.scorer.score(&normalized).await {
            Ok(result) => {
                session.record_assistant_message(result.summary());
                Some(result)
            }
            Err(ScoringError::Rejected { message }) => {
                tracing::warn!(session_id = %session.id(), "Scorer rejected assessment: {}", message);
                session.record_assistant_message(replies::scoring_rejected(&message));
                None
            }
            Err(ScoringError::Transport(detail)) => {
                tracing::error!(session_id = %session.id(), "Scorer unreachable: {}", detail);
                session.record_assistant_message(replies::scoring_unreachable(&detail));
                None
            }
        };

        session.record_assistant_message(replies::FOLLOW_UP);
        session.finish_assessment();
        result
    }
}
