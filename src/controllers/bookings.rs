use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::error::AppError;
use crate::middleware::{AppJson, AppPath, AppQuery, CurrentSession};
use crate::models::forms::blank_as_none;
use crate::models::{Booking, BookingSubmission, HotelSummary};
use crate::services::ledger::draft_booking;
use crate::services::BookingCommand;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookings", get(list_bookings).post(submit_booking))
        .route("/bookings/new", get(booking_entry))
        .route("/bookings/{id}", get(get_booking))
        .route("/bookings/{id}/cancel", patch(cancel_booking))
}

/* ---------- READ ---------- */

// GET /api/bookings
async fn list_bookings(current: CurrentSession) -> impl IntoResponse {
    let session = current.session.lock().await;
    let bookings = session.ledger.list();
    Json(json!({
        "success": true,
        "count": bookings.len(),
        "bookings": bookings,
    }))
}

// GET /api/bookings/{id}
async fn get_booking(
    current: CurrentSession,
    AppPath(id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = current.session.lock().await;
    let booking = session
        .ledger
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Booking", &id))?;
    Ok(Json(booking))
}

/* ---------- ENTRY ---------- */

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    hotel_id: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    room_id: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum BookingEntry {
    HotelSelection { hotels: Vec<HotelSummary> },
    Draft { booking: Booking },
}

// GET /api/bookings/new?hotelId=..&roomId=..
// Without a hotel the client gets the hotel picker, otherwise an unsaved draft.
async fn booking_entry(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<EntryQuery>,
) -> impl IntoResponse {
    let entry = match params.hotel_id {
        None => BookingEntry::HotelSelection {
            hotels: state.catalog.summaries(),
        },
        Some(hotel_id) => BookingEntry::Draft {
            booking: draft_booking(
                &state.catalog,
                Some(hotel_id),
                params.room_id,
                Utc::now().date_naive(),
            ),
        },
    };
    Json(entry)
}

/* ---------- WRITE ---------- */

// POST /api/bookings
// Submit of the new/modify form; the sentinel id "new" creates a booking.
async fn submit_booking(
    State(state): State<Arc<AppState>>,
    current: CurrentSession,
    AppJson(req): AppJson<BookingSubmission>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let command = BookingCommand::from_submission(&req, &state.catalog, Utc::now().date_naive());
    let status = if req.is_new() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let mut session = current.session.lock().await;
    let booking = session
        .ledger
        .dispatch(command)?
        .ok_or_else(|| AppError::not_found("Booking", &req.id))?;

    Ok((status, Json(json!({ "success": true, "booking": booking }))))
}

// PATCH /api/bookings/{id}/cancel
async fn cancel_booking(
    current: CurrentSession,
    AppPath(id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = current.session.lock().await;
    let booking = session
        .ledger
        .dispatch(BookingCommand::Cancel { id: id.clone() })?
        .ok_or_else(|| AppError::not_found("Booking", &id))?;

    Ok(Json(json!({ "success": true, "booking": booking })))
}
