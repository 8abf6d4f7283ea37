//! Conversation domain module.
//!
//! The per-user session, its interaction mode, the transcript, and the
//! text conventions shared with the text generator.

mod mode;
mod prompt;
pub mod replies;
mod session;
mod transcript;

pub use mode::ConversationMode;
pub use prompt::{
    build_chat_prompt, extract_reply, ASSISTANT_MARKER, CHAT_MAX_NEW_TOKENS, CHAT_TEMPERATURE,
};
pub use session::{AnswerOutcome, Intent, Session};
pub use transcript::{Speaker, Transcript, TranscriptEntry};
