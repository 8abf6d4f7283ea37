//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - Questionnaire catalog, severity guidance, answer normalization
//! - `conversation` - Session aggregate, mode state machine, transcript

pub mod assessment;
pub mod conversation;
pub mod foundation;
