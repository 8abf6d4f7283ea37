//! Validated transitions between session modes.

use super::ValidationError;

/// An enum whose variants are states with a fixed set of allowed moves.
///
/// ```ignore
/// let next = ConversationMode::Chat.transition_to(ConversationMode::ShortAssessment)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to `target` is allowed.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// All states reachable in one move.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Moves to `target`, or explains why the move is not allowed.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(self, target))
        }
    }
}
