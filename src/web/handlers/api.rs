//! API endpoint handlers

use crate::state::AppState;
use crate::types::errors::AppError;
use crate::types::message::{ChatRequest, ChatResponse, Mode, SessionHistory};
use crate::types::session::Exchange;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

/// Handle one chat turn: validate, dispatch to the generator selected by
/// mode, record the exchange, return the response envelope.
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    // Validate before touching any provider
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }
    let mode = Mode::parse(&request.mode)
        .ok_or_else(|| AppError::BadRequest("Mode must be 'chat' or 'image'".to_string()))?;

    let session_id = request
        .session_id
        .clone()
        .unwrap_or_else(|| format!("session-{}", Uuid::now_v7()));

    tracing::info!(
        "Received message: '{}' for session: {} ({})",
        request.message,
        session_id,
        mode.as_str()
    );

    let generation = match mode {
        Mode::Chat => state.text.generate(&request.message).await,
        Mode::Image => state.image.generate(&request.message).await,
    };
    if generation.is_fallback() {
        tracing::debug!("Serving fallback response for session {}", session_id);
    }
    let response = generation.into_text();

    let timestamp = Utc::now();
    state.sessions.write().await.append(
        &session_id,
        Exchange {
            timestamp,
            mode,
            message: request.message,
            response: response.clone(),
        },
    );

    Ok(Json(ChatResponse {
        response,
        mode,
        session_id,
        timestamp,
    }))
}

/// Return the full exchange history for a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionHistory>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    Ok(Json(SessionHistory {
        session_id: session.id.clone(),
        history: session.exchanges.clone(),
    }))
}
