use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Service metadata
        .route("/", get(super::handlers::health::index))
        .route("/health", get(super::handlers::health::health_check))
        // API endpoints
        .route("/chat", post(super::handlers::api::send_message))
        .route("/session/{session_id}", get(super::handlers::api::get_session))
        .with_state(state)
}
