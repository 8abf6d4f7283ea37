//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::session::{
    CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler, GetSessionHandler,
    GetSessionQuery, SendMessageCommand, SendMessageHandler, SessionError,
};
use crate::domain::foundation::SessionId;

use super::dto::{
    transcript_response, ErrorResponse, MessageResponse, SendMessageRequest, SessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    send_handler: Arc<SendMessageHandler>,
    delete_handler: Arc<DeleteSessionHandler>,
}

impl SessionHandlers {
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        get_handler: Arc<GetSessionHandler>,
        send_handler: Arc<SendMessageHandler>,
        delete_handler: Arc<DeleteSessionHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            send_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Open a new conversation
pub async fn create_session(State(handlers): State<SessionHandlers>) -> Response {
    match handlers.create_handler.handle().await {
        Ok(result) => {
            let response = SessionResponse::from(&result.session);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions/:id - Get session state and transcript
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions/:id/transcript - Get the ordered transcript only
pub async fn get_transcript(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(session) => (StatusCode::OK, Json(transcript_response(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/sessions/:id/messages - Send a user message
pub async fn send_message(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return reject_body(rejection),
    };

    let cmd = SendMessageCommand {
        session_id,
        content: req.content,
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(MessageResponse::from(result))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /api/sessions/:id - Close a conversation and drop its transcript
pub async fn delete_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteSessionCommand { session_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_session_error(e),
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Malformed, mistyped, or missing request bodies all surface as 400 with
/// the usual error shape.
fn reject_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

fn handle_session_error(error: SessionError) -> Response {
    match error {
        SessionError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        SessionError::EmptyMessage => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Message content cannot be empty")),
        )
            .into_response(),
        SessionError::Domain(err) => {
            tracing::error!(code = %err.code(), "Session operation failed: {}", err.message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(err.message)),
            )
                .into_response()
        }
    }
}
