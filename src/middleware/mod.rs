use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::services::SharedSession;

pub const SESSION_HEADER: &str = "x-session-id";

// Axum extractors whose failures surface as `AppError` JSON bodies.

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Session named by the `x-session-id` header.
pub struct CurrentSession {
    pub id: Uuid,
    pub session: SharedSession,
}

impl FromRequestParts<Arc<crate::AppState>> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        let id = session_id(parts)?;
        let session = state.sessions.get(id)?;
        Ok(CurrentSession { id, session })
    }
}

/// Just the id, for handlers that go through the store themselves.
pub struct SessionId(pub Uuid);

impl FromRequestParts<Arc<crate::AppState>> for SessionId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        session_id(parts).map(SessionId)
    }
}

fn session_id(parts: &Parts) -> Result<Uuid, AppError> {
    parts
        .headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .ok_or(AppError::MissingSession)
}
