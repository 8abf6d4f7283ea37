//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod conversation;
pub mod session;

pub use conversation::{ProcessMessageError, ProcessMessageHandler, ProcessMessageResult};
pub use session::{
    CreateSessionHandler, CreateSessionResult, DeleteSessionCommand, DeleteSessionHandler,
    GetSessionHandler, GetSessionQuery, SendMessageCommand, SendMessageHandler, SessionError,
};
