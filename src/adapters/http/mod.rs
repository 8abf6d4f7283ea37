//! HTTP adapters - REST API implementations.
//!
//! The rendering front-end drives conversations through these endpoints:
//!
//! - `POST /api/sessions` - open a session (greeting included)
//! - `GET  /api/sessions/:id` - mode, cursor and transcript
//! - `GET  /api/sessions/:id/transcript` - transcript only
//! - `POST /api/sessions/:id/messages` - send one user message
//! - `GET  /api/health` - liveness

pub mod health;
pub mod session;

use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use health::health_routes;
pub use session::{session_routes, SessionHandlers};

/// Assembles the full API router.
pub fn build_router(handlers: SessionHandlers, request_timeout: Duration) -> Router {
    let api = Router::new()
        .nest("/sessions", session_routes(handlers))
        .merge(health_routes());

    Router::new().nest("/api", api).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(request_timeout)),
    )
}
