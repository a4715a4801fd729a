//! Health check and service metadata endpoints

use axum::response::Json;
use serde_json::json;

pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Vizzy Chat API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "chat": "/chat (POST)",
            "session": "/session/{session_id} (GET)",
            "health": "/health (GET)"
        }
    }))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
