//! Mock Text Generator for testing.
//!
//! Queued responses are consumed in order; once the queue is empty every call
//! returns a fixed default reply. All requests are recorded for verification.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockTextGenerator::new()
//!     .with_response("User: hi\nAssistant: Hello!")
//!     .with_error(GenerationError::network("connection refused"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{GenerationError, GenerationRequest, TextGenerator};

/// Reply returned when no response is queued.
pub const DEFAULT_MOCK_REPLY: &str = "Assistant: I'm here to listen.";

/// Mock text generator.
#[derive(Debug, Clone, Default)]
pub struct MockTextGenerator {
    responses: Arc<Mutex<VecDeque<Result<String, GenerationError>>>>,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockTextGenerator {
    /// Creates a mock with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful generation.
    pub fn with_response(self, generated: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(generated.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Recorded requests, oldest first.
    pub fn get_calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(DEFAULT_MOCK_REPLY.to_string()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_are_consumed_in_order() {
        let generator = MockTextGenerator::new()
            .with_response("first")
            .with_error(GenerationError::network("down"));

        let first = generator.generate(GenerationRequest::chat("a")).await;
        let second = generator.generate(GenerationRequest::chat("b")).await;
        let third = generator.generate(GenerationRequest::chat("c")).await;

        assert_eq!(first.unwrap(), "first");
        assert_eq!(second.unwrap_err(), GenerationError::network("down"));
        assert_eq!(third.unwrap(), DEFAULT_MOCK_REPLY);
    }

    #[tokio::test]
    async fn records_requests() {
        let generator = MockTextGenerator::new();
        let clone = generator.clone();

        clone.generate(GenerationRequest::chat("prompt")).await.unwrap();

        assert_eq!(generator.call_count(), 1);
        assert_eq!(generator.get_calls()[0].prompt, "prompt");
    }
}
