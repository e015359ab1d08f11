use axum::{response::IntoResponse, routing::post, Json, Router};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::error::AppError;
use crate::middleware::AppJson;
use crate::models::forms::{LoginRequest, RegisterRequest};
use crate::AppState;

// Account forms only. Nothing is authenticated or stored.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

// POST /api/auth/login
async fn login(AppJson(req): AppJson<LoginRequest>) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    tracing::info!("Login attempt for {} (remember me: {})", req.email, req.remember_me);
    Ok(Json(json!({
        "success": true,
        "message": "Login request received",
    })))
}

// POST /api/auth/register
async fn register(AppJson(req): AppJson<RegisterRequest>) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    if !req.passwords_match() {
        tracing::warn!("Registration for {} rejected: passwords do not match", req.email);
        return Err(AppError::PasswordMismatch);
    }
    tracing::info!(
        "Registration attempt for {} ({}, {})",
        req.email,
        req.full_name,
        req.phone_number
    );
    Ok(Json(json!({
        "success": true,
        "message": "Registration request received",
    })))
}
