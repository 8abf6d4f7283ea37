//! Assessment scoring adapters.

mod http_scorer;
mod mock_scorer;

pub use http_scorer::{
    parse_scoring_body, HttpAssessmentScorer, HttpScorerConfig, DEFAULT_SCORING_URL,
};
pub use mock_scorer::MockAssessmentScorer;
