//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Conversation
    ProcessMessageError, ProcessMessageHandler, ProcessMessageResult,
    // Session
    CreateSessionHandler, CreateSessionResult, DeleteSessionCommand, DeleteSessionHandler,
    GetSessionHandler, GetSessionQuery, SendMessageCommand, SendMessageHandler, SessionError,
};
