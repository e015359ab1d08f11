pub mod auth;
pub mod bookings;
pub mod hotels;
pub mod sessions;
pub mod support;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(sessions::routes())
        .merge(hotels::routes())
        .merge(bookings::routes())
        .merge(support::routes())
        .merge(auth::routes())
}
