use serde::Deserialize;
use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::models::booking::validate_optional_range;
use crate::models::forms::{blank_as_none, QuickSearchQuery};
use crate::models::Hotel;

const DEFAULT_GUESTS: u32 = 2;

/// Listing sort order. Anything unrecognised keeps catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Recommended,
    PriceLow,
    PriceHigh,
    Rating,
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            _ => SortKey::Recommended,
        }
    }
}

impl SortKey {
    fn compare(self, a: &Hotel, b: &Hotel) -> Ordering {
        match self {
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Recommended => Ordering::Equal,
        }
    }
}

/// Sidebar filters of the hotel listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelFilter {
    pub location: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub min_price: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_price: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub rating: Option<f32>,
    pub sort: Option<String>,
}

impl HotelFilter {
    pub fn sort_key(&self) -> SortKey {
        self.sort.as_deref().map(SortKey::from).unwrap_or_default()
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        if let Some(needle) = normalized_location(self.location.as_deref()) {
            if !location_matches(hotel, &needle) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| hotel.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| hotel.price > max) {
            return false;
        }
        if self.rating.is_some_and(|floor| hotel.rating < floor) {
            return false;
        }
        true
    }
}

fn normalized_location(location: Option<&str>) -> Option<String> {
    location
        .filter(|needle| !needle.is_empty())
        .map(str::to_lowercase)
}

fn location_matches(hotel: &Hotel, needle: &str) -> bool {
    hotel.location.to_lowercase().contains(needle)
}

/// Searches the static hotel catalog
#[derive(Clone)]
pub struct SearchClient {
    catalog: Catalog,
}

impl SearchClient {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Listing page: filter, then a stable sort on the chosen key.
    pub fn search_hotels(&self, filter: &HotelFilter) -> Vec<Hotel> {
        let mut hotels: Vec<Hotel> = self
            .catalog
            .hotels()
            .iter()
            .filter(|hotel| filter.matches(hotel))
            .cloned()
            .collect();
        let key = filter.sort_key();
        hotels.sort_by(|a, b| key.compare(a, b));
        hotels
    }

    /// Home page search: location plus a room large enough for the party.
    pub fn quick_search(&self, query: &QuickSearchQuery) -> Result<Vec<Hotel>, AppError> {
        validate_optional_range(query.check_in, query.check_out)?;

        let guests = query.guests.unwrap_or(DEFAULT_GUESTS);
        let needle = normalized_location(query.location.as_deref()).unwrap_or_default();

        Ok(self
            .catalog
            .hotels()
            .iter()
            .filter(|hotel| location_matches(hotel, &needle) && hotel.fits(guests))
            .cloned()
            .collect())
    }
}
