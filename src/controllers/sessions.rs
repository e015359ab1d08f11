use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::AppPath;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions", post(open_session))
        .route("/sessions/{id}", delete(close_session))
}

// POST /api/sessions
async fn open_session(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let id = state.sessions.open();
    let info = state.sessions.get(id)?.lock().await.info();
    Ok((StatusCode::CREATED, Json(info)))
}

// DELETE /api/sessions/{id}
async fn close_session(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.close(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::UnknownSession(id))
    }
}
