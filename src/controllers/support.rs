use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::error::AppError;
use crate::middleware::{AppJson, CurrentSession, SessionId};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/support/messages", get(get_transcript).post(send_message))
}

fn ensure_enabled(state: &AppState) -> Result<(), AppError> {
    if state.config.features.enable_support_chat {
        Ok(())
    } else {
        Err(AppError::ChatDisabled)
    }
}

// GET /api/support/messages
async fn get_transcript(
    State(state): State<Arc<AppState>>,
    current: CurrentSession,
) -> Result<impl IntoResponse, AppError> {
    ensure_enabled(&state)?;
    let session = current.session.lock().await;
    Ok(Json(session.chat.clone()))
}

#[derive(Debug, Deserialize)]
struct SendMessageRequest {
    text: String,
}

// POST /api/support/messages
// The bot reply is appended later; poll the transcript to see it.
async fn send_message(
    State(state): State<Arc<AppState>>,
    SessionId(id): SessionId,
    AppJson(req): AppJson<SendMessageRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_enabled(&state)?;
    match state.sessions.post_chat_message(id, &req.text).await? {
        Some(message) => Ok((
            StatusCode::ACCEPTED,
            Json(json!({ "success": true, "message": message })),
        )),
        None => Ok((
            StatusCode::OK,
            Json(json!({ "success": true, "message": null })),
        )),
    }
}
