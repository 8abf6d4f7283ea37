//! Integration tests for the HTTP API.
//!
//! Drives the assembled router with `tower::ServiceExt::oneshot`, using mock
//! generation and scoring services behind the real handlers and storage.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use vonix::adapters::http::{build_router, SessionHandlers};
use vonix::adapters::{InMemorySessionRepository, MockAssessmentScorer, MockTextGenerator};
use vonix::application::{
    CreateSessionHandler, DeleteSessionHandler, GetSessionHandler, ProcessMessageHandler,
    SendMessageHandler,
};
use vonix::domain::assessment::AssessmentResult;
use vonix::ports::SessionRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with(generator: MockTextGenerator, scorer: MockAssessmentScorer) -> Router {
    let repository: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
    let processor = ProcessMessageHandler::new(Arc::new(generator), Arc::new(scorer));
    let handlers = SessionHandlers::new(
        Arc::new(CreateSessionHandler::new(repository.clone())),
        Arc::new(GetSessionHandler::new(repository.clone())),
        Arc::new(SendMessageHandler::new(repository.clone(), processor)),
        Arc::new(DeleteSessionHandler::new(repository)),
    );
    build_router(handlers, Duration::from_secs(5))
}

fn app() -> Router {
    app_with(MockTextGenerator::new(), MockAssessmentScorer::new())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create_session(app: &Router) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/sessions")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    body["sessionId"].as_str().unwrap().to_string()
}

async fn post_message(app: &Router, id: &str, content: &str) -> (StatusCode, Value) {
    send(
        app,
        post_json(
            &format!("/api/sessions/{}/messages", id),
            json!({ "content": content }),
        ),
    )
    .await
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn new_session_starts_in_chat_with_greeting() {
    let app = app();
    let id = create_session(&app).await;

    let (status, body) = send(&app, get(&format!("/api/sessions/{}", id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "chat");
    assert_eq!(body["cursor"], 0);
    let transcript = body["transcript"].as_array().unwrap();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0]["speaker"], "assistant");
    assert!(transcript[0]["text"].as_str().unwrap().contains("Nix"));
}

#[tokio::test]
async fn chat_message_returns_extracted_reply() {
    let generator = MockTextGenerator::new().with_response("User: hello\nAssistant: Hi there!");
    let app = app_with(generator, MockAssessmentScorer::new());
    let id = create_session(&app).await;

    let (status, body) = post_message(&app, &id, "hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["replies"], json!(["Hi there!"]));
    assert_eq!(body["mode"], "chat");
}

#[tokio::test]
async fn starting_full_assessment_reports_question_count() {
    let app = app();
    let id = create_session(&app).await;

    let (_, body) = post_message(&app, &id, "2").await;
    assert_eq!(body["mode"], "full_assessment");

    let (_, session) = send(&app, get(&format!("/api/sessions/{}", id))).await;
    assert_eq!(session["totalQuestions"], 42);
}

#[tokio::test]
async fn completed_short_assessment_returns_result_with_guidance() {
    let scorer =
        MockAssessmentScorer::new().with_result(AssessmentResult::new("Severe", "Mild", "Normal"));
    let app = app_with(MockTextGenerator::new(), scorer.clone());
    let id = create_session(&app).await;
    post_message(&app, &id, "1").await;

    let mut last = Value::Null;
    for _ in 0..21 {
        let (status, body) = post_message(&app, &id, "3").await;
        assert_eq!(status, StatusCode::OK);
        last = body;
    }

    assert_eq!(scorer.call_count(), 1);
    assert_eq!(last["mode"], "chat");
    assert_eq!(last["assessment"]["depression"], "Severe");
    assert_eq!(last["assessment"]["guidance"].as_array().unwrap().len(), 3);
    let replies = last["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 2);
    assert!(replies[0].as_str().unwrap().starts_with("**Assessment Result**"));
}

#[tokio::test]
async fn transcript_endpoint_lists_turns_in_order() {
    let app = app();
    let id = create_session(&app).await;
    post_message(&app, &id, "1").await;
    post_message(&app, &id, "9").await;

    let (status, body) = send(&app, get(&format!("/api/sessions/{}/transcript", id))).await;

    assert_eq!(status, StatusCode::OK);
    let speakers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["speaker"].as_str().unwrap())
        .collect();
    assert_eq!(
        speakers,
        vec!["assistant", "user", "assistant", "user", "assistant"]
    );
    assert_eq!(
        body[4]["text"],
        "Please answer with a number from 1 to 4."
    );
}

#[tokio::test]
async fn unknown_session_is_404() {
    let app = app();
    let missing = "00000000-0000-4000-8000-000000000000";

    let (status, body) = send(&app, get(&format!("/api/sessions/{}", missing))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = post_message(&app, missing, "hello").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_session_id_is_400() {
    let (status, body) = send(&app(), get("/api/sessions/not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid session ID");
}

#[tokio::test]
async fn malformed_body_is_400_with_error_shape() {
    let app = app();
    let id = create_session(&app).await;
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/sessions/{}/messages", id))
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn body_without_content_field_is_400() {
    let app = app();
    let id = create_session(&app).await;

    let (status, body) = send(
        &app,
        post_json(&format!("/api/sessions/{}/messages", id), json!({ "text": "hi" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn deleted_session_is_gone() {
    let app = app();
    let id = create_session(&app).await;
    let uri = format!("/api/sessions/{}", id);
    let delete = |uri: &str| {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let (status, body) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn empty_message_is_400() {
    let app = app();
    let id = create_session(&app).await;

    let (status, _) = post_message(&app, &id, "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, get(&format!("/api/sessions/{}/transcript", id))).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}
