//! Session command and query handlers.

mod create_session;
mod delete_session;
mod get_session;
mod send_message;
mod session_error;

pub use create_session::{CreateSessionHandler, CreateSessionResult};
pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use send_message::{SendMessageCommand, SendMessageHandler};
pub use session_error::SessionError;
