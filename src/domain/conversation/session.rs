//! Session aggregate: the per-conversation state owned by the core.
//!
//! # Invariants
//!
//! - `answers.len() == cursor` while an assessment is in progress
//! - `answers` is empty and `cursor` is 0 whenever `mode == Chat`
//! - `completed` is only true between recording the last answer and
//!   `finish_assessment`

use std::collections::BTreeMap;

use crate::domain::assessment::{Question, QuestionId, QuestionSet};
use crate::domain::foundation::{
    DomainError, ErrorCode, LikertAnswer, SessionId, StateMachine, Timestamp,
};

use super::mode::ConversationMode;
use super::replies;
use super::transcript::{Speaker, Transcript};

/// What an incoming user message means in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Start a questionnaire (chat mode, message `1` or `2`).
    BeginAssessment(QuestionSet),
    /// Forward to the text generator.
    Chat,
    /// A valid answer for the current question.
    Answer(LikertAnswer),
    /// Anything else while an assessment is running.
    InvalidAnswer,
}

/// Result of recording an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Answer stored; `number` is the one-based position of `question`.
    Next {
        number: usize,
        question: &'static Question,
    },
    /// Last answer stored; the set is ready for scoring.
    Completed,
    /// Nothing was stored.
    Rejected,
}

/// A single user's conversation with the assistant.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    mode: ConversationMode,
    transcript: Transcript,
    answers: BTreeMap<QuestionId, LikertAnswer>,
    cursor: usize,
    completed: bool,
    created_at: Timestamp,
}

impl Session {
    /// Creates a session in chat mode with the opening greeting.
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    /// Creates a session with a specific ID.
    pub fn with_id(id: SessionId) -> Self {
        let mut transcript = Transcript::new();
        transcript.append(Speaker::Assistant, replies::GREETING);

        Self {
            id,
            mode: ConversationMode::Chat,
            transcript,
            answers: BTreeMap::new(),
            cursor: 0,
            completed: false,
            created_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn mode(&self) -> ConversationMode {
        self.mode
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn answers(&self) -> &BTreeMap<QuestionId, LikertAnswer> {
        &self.answers
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// The question set of the running assessment.
    pub fn active_set(&self) -> Option<QuestionSet> {
        self.mode.question_set()
    }

    /// The next unanswered question, if any.
    pub fn current_question(&self) -> Option<&'static Question> {
        self.active_set().and_then(|set| set.question(self.cursor))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Interpretation
    // ─────────────────────────────────────────────────────────────────────────

    /// Classifies a user message against the current mode.
    pub fn classify(&self, message: &str) -> Intent {
        let trimmed = message.trim();
        match self.mode {
            ConversationMode::Chat => match trimmed {
                "1" => Intent::BeginAssessment(QuestionSet::Short),
                "2" => Intent::BeginAssessment(QuestionSet::Full),
                _ => Intent::Chat,
            },
            _ => match LikertAnswer::parse(trimmed) {
                Some(answer) => Intent::Answer(answer),
                None => Intent::InvalidAnswer,
            },
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transcript
    // ─────────────────────────────────────────────────────────────────────────

    pub fn record_user_message(&mut self, text: impl Into<String>) {
        self.transcript.append(Speaker::User, text);
    }

    pub fn record_assistant_message(&mut self, text: impl Into<String>) {
        self.transcript.append(Speaker::Assistant, text);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Assessment lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Enters an assessment and returns its first question.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless the session is in chat mode
    pub fn begin_assessment(&mut self, set: QuestionSet) -> Result<&'static Question, DomainError> {
        let target = ConversationMode::for_assessment(set);
        self.mode = self.mode.transition_to(target)?;
        self.answers.clear();
        self.cursor = 0;
        self.completed = false;

        set.question(0).ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "question set is empty")
        })
    }

    /// Stores an answer for the current question and advances the cursor.
    ///
    /// Rejected, with no state change, outside an assessment, after the last
    /// answer, or when the current question already has an answer.
    pub fn record_answer(&mut self, answer: LikertAnswer) -> AnswerOutcome {
        let Some(set) = self.active_set() else {
            return AnswerOutcome::Rejected;
        };
        if self.completed {
            return AnswerOutcome::Rejected;
        }
        let Some(question) = set.question(self.cursor) else {
            return AnswerOutcome::Rejected;
        };
        if self.answers.contains_key(&question.id) {
            return AnswerOutcome::Rejected;
        }

        self.answers.insert(question.id, answer);
        self.cursor += 1;

        match set.question(self.cursor) {
            Some(next) => AnswerOutcome::Next {
                number: self.cursor + 1,
                question: next,
            },
            None => {
                self.completed = true;
                AnswerOutcome::Completed
            }
        }
    }

    /// Leaves the assessment and clears its answers.
    pub fn finish_assessment(&mut self) {
        self.completed = false;
        self.answers.clear();
        self.cursor = 0;
        if let Ok(mode) = self.mode.transition_to(ConversationMode::Chat) {
            self.mode = mode;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
