//! Storage Adapters
//!
//! Implementations of the SessionRepository port.
//!
//! - **InMemorySessionRepository** - process-lifetime storage with a mutex
//!   per session

mod in_memory_session_repository;

pub use in_memory_session_repository::InMemorySessionRepository;
