//! Text generation adapters.
//!
//! - `HuggingFaceGenerator` - hosted inference API over HTTP
//! - `MockTextGenerator` - queued responses for tests

mod huggingface_provider;
mod mock_generator;

pub use huggingface_provider::{
    parse_generation_body, HuggingFaceConfig, HuggingFaceGenerator, DEFAULT_API_URL,
};
pub use mock_generator::{MockTextGenerator, DEFAULT_MOCK_REPLY};
