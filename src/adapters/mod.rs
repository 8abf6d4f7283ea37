//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - text generation (HuggingFace inference API, mock)
//! - `scoring` - DASS prediction service (HTTP, mock)
//! - `storage` - session storage (in-memory)
//! - `http` - axum REST surface

pub mod ai;
pub mod http;
pub mod scoring;
pub mod storage;

pub use ai::{HuggingFaceConfig, HuggingFaceGenerator, MockTextGenerator};
pub use scoring::{HttpAssessmentScorer, HttpScorerConfig, MockAssessmentScorer};
pub use storage::InMemorySessionRepository;
