use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub capacity: u32,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hotel {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub price: u32,
    pub rating: f32,
    pub image: String,
    pub amenities: Vec<String>,
    pub rooms: Vec<Room>,
}

impl Hotel {
    pub fn room(&self, room_id: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == room_id)
    }

    /// Whether any room can sleep `guests` people.
    pub fn fits(&self, guests: u32) -> bool {
        self.rooms.iter().any(|room| room.capacity >= guests)
    }
}

/// Card shown in listing grids and the hotel-selection screen.
#[derive(Debug, Clone, Serialize)]
pub struct HotelSummary {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub price: u32,
    pub rating: f32,
    pub image: String,
}

impl From<&Hotel> for HotelSummary {
    fn from(hotel: &Hotel) -> Self {
        HotelSummary {
            id: hotel.id,
            name: hotel.name.clone(),
            location: hotel.location.clone(),
            price: hotel.price,
            rating: hotel.rating,
            image: hotel.image.clone(),
        }
    }
}
