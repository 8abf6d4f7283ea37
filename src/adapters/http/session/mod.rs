//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AssessmentResponse, ErrorResponse, GuidanceResponse, MessageResponse, SendMessageRequest,
    SessionResponse, TranscriptEntryResponse,
};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
