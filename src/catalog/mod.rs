use std::sync::Arc;
use tracing::info;

use crate::models::{Hotel, HotelSummary};

mod bookings;
mod hotels;
mod rooms;

pub use bookings::seed_bookings;
pub use rooms::SuggestedRoom;

pub const DEFAULT_HOTEL_IMAGE: &str =
    "https://images.unsplash.com/photo-1590073242678-70ee3fc28e8e?q=80&w=1200";

/// Immutable mock data shared by every session.
#[derive(Clone)]
pub struct Catalog {
    hotels: Arc<[Hotel]>,
    suggestions: Arc<[SuggestedRoom]>,
}

impl Catalog {
    pub fn new(hotels: Vec<Hotel>, suggestions: Vec<SuggestedRoom>) -> Self {
        Self {
            hotels: hotels.into(),
            suggestions: suggestions.into(),
        }
    }

    /// Catalog populated with the demo hotels and chat suggestions.
    pub fn demo() -> Self {
        let catalog = Self::new(hotels::demo_hotels(), rooms::demo_suggestions());
        info!(
            "Catalog loaded: {} hotels, {} suggested rooms",
            catalog.hotels.len(),
            catalog.suggestions.len()
        );
        catalog
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn hotel(&self, id: u32) -> Option<&Hotel> {
        self.hotels.iter().find(|hotel| hotel.id == id)
    }

    pub fn summaries(&self) -> Vec<HotelSummary> {
        self.hotels.iter().map(HotelSummary::from).collect()
    }

    pub fn suggestions(&self) -> &[SuggestedRoom] {
        &self.suggestions
    }
}
