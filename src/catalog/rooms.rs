use serde::Serialize;

/// Room the support chat can recommend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedRoom {
    pub name: String,
    pub price: u32,
    pub location: String,
    pub description: String,
    pub features: Vec<String>,
    pub nearby_attractions: String,
    pub dining: String,
}

impl SuggestedRoom {
    /// One-line summary used in chat replies.
    pub fn summary(&self) -> String {
        format!(
            "{} in {} at ${}/night ({})",
            self.name,
            self.location,
            self.price,
            self.features.join(", ")
        )
    }
}

fn suggestion(
    name: &str,
    price: u32,
    location: &str,
    description: &str,
    features: [&str; 5],
    nearby_attractions: &str,
    dining: &str,
) -> SuggestedRoom {
    SuggestedRoom {
        name: name.to_string(),
        price,
        location: location.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        nearby_attractions: nearby_attractions.to_string(),
        dining: dining.to_string(),
    }
}

pub(super) fn demo_suggestions() -> Vec<SuggestedRoom> {
    vec![
        suggestion(
            "Premium Room - Sofitel Legend Metropole",
            350,
            "Hoan Kiem District, Hanoi",
            "Luxurious 45m² room in the historic wing with colonial charm",
            [
                "French colonial decor",
                "Premium Sofitel MyBed™",
                "Hermès bath amenities",
                "Club Metropole access",
                "Butler service",
            ],
            "Walking distance to Hoan Kiem Lake and Old Quarter",
            "Access to Le Beaulieu French restaurant",
        ),
        suggestion(
            "Grand Deluxe Suite - Vinpearl Luxury",
            280,
            "Tay Ho District, Hanoi",
            "Modern 60m² suite overlooking West Lake",
            [
                "Panoramic lake view",
                "Separate living area",
                "Executive lounge access",
                "Rain shower and soaking tub",
                "Smart room controls",
            ],
            "Near Tran Quoc Pagoda and West Lake",
            "Complimentary breakfast buffet",
        ),
        suggestion(
            "Ocean Pool Villa - InterContinental Danang",
            420,
            "Son Tra Peninsula, Da Nang",
            "Luxurious 150m² villa with private infinity pool",
            [
                "Private infinity pool",
                "Direct beach access",
                "Outdoor dining area",
                "Personal butler",
                "Luxury spa bathroom",
            ],
            "Views of Monkey Mountain and East Sea",
            "Access to Michelin-star La Maison 1888",
        ),
        suggestion(
            "Beach View Suite - Hyatt Regency",
            250,
            "Ngu Hanh Son, Da Nang",
            "Elegant 55m² suite with panoramic beach views",
            [
                "Private balcony",
                "Marble bathroom",
                "Club lounge access",
                "Beach service",
                "Evening cocktails",
            ],
            "Near My Khe Beach and Marble Mountains",
            "Multiple restaurants and bars",
        ),
        suggestion(
            "Park Suite - Park Hyatt Saigon",
            380,
            "District 1, Ho Chi Minh City",
            "Sophisticated 70m² suite with city views",
            [
                "Italian marble bathroom",
                "Walk-in closet",
                "Butler service",
                "Luxury spa access",
                "Evening canapes",
            ],
            "Next to Opera House and Nguyen Hue Street",
            "Square One Vietnamese restaurant",
        ),
        suggestion(
            "River Studio - Le Meridien Saigon",
            220,
            "District 1, Ho Chi Minh City",
            "Modern 42m² room with Saigon River views",
            [
                "Floor-to-ceiling windows",
                "Signature Le Meridien bed",
                "Rain shower",
                "Club lounge access",
                "Welcome drinks",
            ],
            "Near Bach Dang Waterfront and Bitexco Tower",
            "Latest Recipe international buffet",
        ),
    ]
}
