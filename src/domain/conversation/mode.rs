//! Conversation mode state machine.
//!
//! Defines the interaction modes of a session and valid transitions.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::QuestionSet;
use crate::domain::foundation::StateMachine;

/// The interaction mode a session is in.
///
/// The flow is cyclical: both assessments return to `Chat` once scored.
/// - `Chat`: free conversation proxied to the text generator
/// - `ShortAssessment`: 21-item questionnaire in progress
/// - `FullAssessment`: 42-item questionnaire in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationMode {
    #[default]
    Chat,
    ShortAssessment,
    FullAssessment,
}

impl ConversationMode {
    /// Returns the assessment mode for a question set.
    pub fn for_assessment(set: QuestionSet) -> Self {
        match set {
            QuestionSet::Short => Self::ShortAssessment,
            QuestionSet::Full => Self::FullAssessment,
        }
    }

    /// Returns the active question set, if an assessment is running.
    pub fn question_set(&self) -> Option<QuestionSet> {
        match self {
            Self::Chat => None,
            Self::ShortAssessment => Some(QuestionSet::Short),
            Self::FullAssessment => Some(QuestionSet::Full),
        }
    }
}

impl StateMachine for ConversationMode {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationMode::*;
        matches!(
            (self, target),
            (Chat, ShortAssessment)
                | (Chat, FullAssessment)
                | (ShortAssessment, Chat)
                | (FullAssessment, Chat)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationMode::*;
        match self {
            Chat => vec![ShortAssessment, FullAssessment],
            ShortAssessment => vec![Chat],
            FullAssessment => vec![Chat],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_chat() {
        assert_eq!(ConversationMode::default(), ConversationMode::Chat);
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&ConversationMode::ShortAssessment).unwrap();
        assert_eq!(json, "\"short_assessment\"");
    }

    #[test]
    fn question_set_follows_mode() {
        assert_eq!(ConversationMode::Chat.question_set(), None);
        assert_eq!(
            ConversationMode::ShortAssessment.question_set(),
            Some(QuestionSet::Short)
        );
        assert_eq!(
            ConversationMode::FullAssessment.question_set(),
            Some(QuestionSet::Full)
        );
    }

    #[test]
    fn for_assessment_round_trips_through_question_set() {
        for set in [QuestionSet::Short, QuestionSet::Full] {
            assert_eq!(ConversationMode::for_assessment(set).question_set(), Some(set));
        }
    }

    #[test]
    fn assessments_cannot_switch_directly() {
        let mode = ConversationMode::ShortAssessment;
        assert!(mode.transition_to(ConversationMode::FullAssessment).is_err());
    }

    #[test]
    fn every_mode_has_a_way_out() {
        for mode in [
            ConversationMode::Chat,
            ConversationMode::ShortAssessment,
            ConversationMode::FullAssessment,
        ] {
            assert!(!mode.valid_transitions().is_empty());
            for target in mode.valid_transitions() {
                assert!(mode.can_transition_to(&target));
            }
        }
    }
}
