//! Assistant message texts.

use crate::domain::assessment::{Question, QuestionSet};

/// Opening message of every new session.
pub const GREETING: &str = "👋 Hi! I’m **Nix**, your mental wellness assistant.\n\nYou can type `1` to start a short checkup, `2` for a full checkup, or ask me anything!";

/// Reply to anything other than a digit 1-4 during an assessment.
pub const INVALID_ANSWER: &str = "Please answer with a number from 1 to 4.";

/// Sent after every assessment ending, whatever the scoring outcome.
pub const FOLLOW_UP: &str =
    "You can now ask me anything again or type `1`/`2` to start a new assessment.";

/// Announces an assessment and asks its first question.
pub fn assessment_started(set: QuestionSet, first: &Question) -> String {
    let name = match set {
        QuestionSet::Short => "Starting short version",
        QuestionSet::Full => "Starting full version",
    };
    format!(
        "{} ({} questions). Answer 1–4.\n\n{}",
        name,
        set.len(),
        question_prompt(1, first)
    )
}

/// Asks a question, numbered from one.
pub fn question_prompt(number: usize, question: &Question) -> String {
    format!("{}. {} (1–4)", number, question.prompt)
}

/// Scorer reported a failure status.
pub fn scoring_rejected(message: &str) -> String {
    format!("Error: {}", message)
}

/// Scorer could not be reached or answered garbage.
pub fn scoring_unreachable(detail: &str) -> String {
    format!("Could not connect to backend: {}", detail)
}
