//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_session, delete_session, get_session, get_transcript, send_message, SessionHandlers,
};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_session).delete(delete_session))
        .route("/:id/transcript", get(get_transcript))
        .route("/:id/messages", post(send_message))
        .with_state(handlers)
}
