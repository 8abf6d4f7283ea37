//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Vonix domain.

mod errors;
mod ids;
mod likert;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MessageId, SessionId};
pub use likert::LikertAnswer;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
