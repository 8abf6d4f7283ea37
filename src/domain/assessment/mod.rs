//! Assessment domain module.
//!
//! Static tables for the DASS self-report questionnaire (question catalog,
//! severity guidance), the answer normalizer applied before scoring, and the
//! result returned by the remote scorer.

mod catalog;
mod interpretation;
mod normalizer;
mod result;

pub use catalog::{Question, QuestionId, QuestionSet};
pub use interpretation::{guidance, Dimension, SeverityBand};
pub use normalizer::{normalize_answers, normalize_value, NormalizedAnswers};
pub use result::AssessmentResult;
