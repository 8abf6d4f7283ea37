//! Mock Assessment Scorer for testing.
//!
//! Queued outcomes are consumed in order; with an empty queue every call
//! scores "normal" on all three dimensions.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::assessment::{AssessmentResult, NormalizedAnswers};
use crate::ports::{AssessmentScorer, ScoringError};

/// Mock scorer with call recording.
#[derive(Debug, Clone, Default)]
pub struct MockAssessmentScorer {
    outcomes: Arc<Mutex<VecDeque<Result<AssessmentResult, ScoringError>>>>,
    calls: Arc<Mutex<Vec<NormalizedAnswers>>>,
}

impl MockAssessmentScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful result.
    pub fn with_result(self, result: AssessmentResult) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(result));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ScoringError) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Payloads received, oldest first.
    pub fn get_calls(&self) -> Vec<NormalizedAnswers> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssessmentScorer for MockAssessmentScorer {
    async fn score(&self, answers: &NormalizedAnswers) -> Result<AssessmentResult, ScoringError> {
        self.calls.lock().unwrap().push(answers.clone());

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(AssessmentResult::new("normal", "normal", "normal")))
    }
}
