//! HTTP surface tests, driven through the router without a live server.
//!
//! No provider credentials are configured, so every generation takes the
//! documented fallback path and no network calls are made.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use vizzy_chat::config::Config;
use vizzy_chat::state::AppState;
use vizzy_chat::web::create_app;

fn test_state() -> AppState {
    AppState::new(Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        text_api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
        text_api_key: None,
        text_model: "openai/gpt-3.5-turbo".to_string(),
        max_completion_tokens: 500,
        image_api_url: "http://127.0.0.1:9/models/stable-diffusion-2".to_string(),
        image_api_key: None,
        request_timeout_secs: 1,
    })
}

async fn get(state: &AppState, uri: &str) -> (StatusCode, Value) {
    let response = create_app(state.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    into_json(response).await
}

async fn post_chat(state: &AppState, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = create_app(state.clone()).oneshot(request).await.unwrap();
    into_json(response).await
}

async fn into_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get(&test_state(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn root_lists_endpoints() {
    let (status, body) = get(&test_state(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Vizzy Chat API");
    assert_eq!(body["endpoints"]["chat"], "/chat (POST)");
    assert_eq!(body["endpoints"]["health"], "/health (GET)");
}

#[tokio::test]
async fn chat_without_credentials_echoes_message() {
    let state = test_state();
    let (status, body) =
        post_chat(&state, json!({ "message": "hello", "mode": "chat" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Echo: hello");
    assert_eq!(body["mode"], "chat");
    assert!(body["session_id"].as_str().unwrap().starts_with("session-"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn chat_mode_defaults_to_chat() {
    let (status, body) = post_chat(&test_state(), json!({ "message": "hi" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "chat");
    assert_eq!(body["response"], "Echo: hi");
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let (status, body) = post_chat(&test_state(), json!({ "message": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message cannot be empty");
}

#[tokio::test]
async fn invalid_mode_is_rejected() {
    let (status, body) =
        post_chat(&test_state(), json!({ "message": "hello", "mode": "video" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Mode must be 'chat' or 'image'");
}

#[tokio::test]
async fn image_without_credentials_returns_placeholder() {
    let (status, body) =
        post_chat(&test_state(), json!({ "message": "a cat", "mode": "image" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "image");
    let response = body["response"].as_str().unwrap();
    assert!(response.starts_with("https://via.placeholder.com/500x500"));
    assert!(response.ends_with("text=a%20cat"));
}

#[tokio::test]
async fn session_history_grows_per_call_in_order() {
    let state = test_state();

    let (status, first) = post_chat(
        &state,
        json!({ "message": "first", "session_id": "abc" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["session_id"], "abc");

    post_chat(
        &state,
        json!({ "message": "second", "mode": "image", "session_id": "abc" }),
    )
    .await;

    let (status, body) = get(&state, "/session/abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session_id"], "abc");

    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["message"], "first");
    assert_eq!(history[0]["mode"], "chat");
    assert_eq!(history[1]["message"], "second");
    assert_eq!(history[1]["mode"], "image");
}

#[tokio::test]
async fn unknown_session_returns_not_found() {
    let (status, body) = get(&test_state(), "/session/never-used").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session not found");
}

#[tokio::test]
async fn synthesized_session_ids_are_distinct() {
    let state = test_state();
    let (_, first) = post_chat(&state, json!({ "message": "one" })).await;
    let (_, second) = post_chat(&state, json!({ "message": "two" })).await;
    assert_ne!(first["session_id"], second["session_id"]);
}
