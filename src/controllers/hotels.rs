use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::error::AppError;
use crate::middleware::{AppJson, AppPath, AppQuery};
use crate::models::booking::stay_nights;
use crate::models::forms::{QuickSearchQuery, ReservationRequest};
use crate::search_client::HotelFilter;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/hotels", get(list_hotels))
        .route("/hotels/{id}", get(get_hotel))
        .route("/hotels/{id}/reservations", post(reserve_room))
        .route("/search", get(quick_search))
}

// GET /api/hotels
async fn list_hotels(
    State(state): State<Arc<AppState>>,
    AppQuery(filter): AppQuery<HotelFilter>,
) -> impl IntoResponse {
    let hotels = state.search_client.search_hotels(&filter);
    Json(json!({
        "success": true,
        "count": hotels.len(),
        "hotels": hotels,
    }))
}

// GET /api/hotels/{id}
async fn get_hotel(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u32>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = state
        .catalog
        .hotel(id)
        .ok_or_else(|| AppError::not_found("Hotel", id))?;
    Ok(Json(hotel.clone()))
}

// GET /api/search
async fn quick_search(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<QuickSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = state.search_client.quick_search(&query)?;
    Ok(Json(json!({
        "success": true,
        "count": hotels.len(),
        "hotels": hotels,
    })))
}

// POST /api/hotels/{id}/reservations
// The hotel page form: checked and logged, nothing is stored.
async fn reserve_room(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u32>,
    AppJson(req): AppJson<ReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let hotel = state
        .catalog
        .hotel(id)
        .ok_or_else(|| AppError::not_found("Hotel", id))?;
    let nights = stay_nights(req.check_in, req.check_out)?;

    tracing::info!(
        "Reservation request for {} ({}): {} nights from {}, guest {} <{}>, {} chars of special requests",
        hotel.name,
        hotel.id,
        nights,
        req.check_in,
        req.full_name,
        req.email,
        req.special_requests.len()
    );

    Ok(Json(json!({
        "success": true,
        "message": "Room has been booked successfully",
    })))
}
