//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TextGenerator` - free-chat completion service
//! - `AssessmentScorer` - remote questionnaire scoring service
//! - `SessionRepository` - live session storage

mod assessment_scorer;
mod session_repository;
mod text_generator;

pub use assessment_scorer::{AssessmentScorer, ScoringError};
pub use session_repository::SessionRepository;
pub use text_generator::{GenerationError, GenerationRequest, TextGenerator};
