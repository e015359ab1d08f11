use crate::models::{Hotel, Room};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn room(id: u32, name: &str, description: &str, price: u32, capacity: u32, amenities: &[&str], image: &str) -> Room {
    Room {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        capacity,
        amenities: strings(amenities),
        images: vec![image.to_string()],
    }
}

#[allow(clippy::too_many_arguments)]
fn hotel(
    id: u32,
    name: &str,
    description: &str,
    location: &str,
    price: u32,
    rating: f32,
    image: &str,
    amenities: &[&str],
    rooms: Vec<Room>,
) -> Hotel {
    Hotel {
        id,
        name: name.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        price,
        rating,
        image: image.to_string(),
        amenities: strings(amenities),
        rooms,
    }
}

const IMG_ROOM_CLASSIC: &str = "https://images.unsplash.com/photo-1618773928121-c32242e63f39?q=80&w=1200";
const IMG_ROOM_OCEAN: &str = "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?q=80&w=1200";
const IMG_ROOM_SUITE: &str = "https://images.unsplash.com/photo-1578683010236-d716f9a3f461?q=80&w=1200";
const IMG_ROOM_GRAND: &str = "https://images.unsplash.com/photo-1591088398332-8a7791972843?q=80&w=1200";

pub(super) fn demo_hotels() -> Vec<Hotel> {
    let mut hotels = bookable_hotels();
    hotels.extend(listing_hotels());
    hotels
}

// Vietnamese properties with room inventory; these drive detail pages and
// the home search.
fn bookable_hotels() -> Vec<Hotel> {
    vec![
        hotel(
            1,
            "Sofitel Legend Metropole Hanoi",
            "Historic 5-star luxury hotel in the heart of Hanoi, featuring French colonial architecture, world-class dining, and timeless elegance. Experience the blend of Vietnamese hospitality and French art de vivre.",
            "Hoan Kiem District, Hanoi",
            350,
            4.9,
            super::DEFAULT_HOTEL_IMAGE,
            &[
                "French Restaurant",
                "Spa",
                "Historic Wing",
                "Le Club Bar",
                "Butler Service",
                "Swimming Pool",
                "Fitness Center",
                "Club Metropole Access",
            ],
            vec![
                room(
                    1,
                    "Premium Room",
                    "Luxurious 45m² room in the historic wing with colonial charm, featuring premium Sofitel MyBed™ and Hermès amenities",
                    350,
                    2,
                    &["French colonial decor", "Premium Sofitel MyBed™", "Hermès bath amenities", "Club Metropole access", "Butler service"],
                    IMG_ROOM_CLASSIC,
                ),
                room(
                    2,
                    "Grand Suite Opera",
                    "Elegant 75m² suite with Opera Wing views, separate living room, and exclusive Club Metropole privileges",
                    550,
                    3,
                    &["Opera House view", "Living room", "Club Lounge access", "Premium bar setup", "Personal butler"],
                    IMG_ROOM_SUITE,
                ),
                room(
                    3,
                    "Legendary Suite",
                    "Historic 100m² suite featuring colonial grandeur, private terrace, and personalized luxury services",
                    850,
                    4,
                    &["Historic decor", "Private terrace", "24/7 butler", "Dining room", "Luxury spa access"],
                    IMG_ROOM_GRAND,
                ),
            ],
        ),
        hotel(
            2,
            "InterContinental Danang Sun Peninsula",
            "Luxury beach resort nestled in the hills of Monkey Mountain, offering stunning views of the East Sea. Experience world-class dining at La Maison 1888 and relaxation at HARNN Heritage Spa.",
            "Son Tra Peninsula, Da Nang",
            420,
            4.8,
            "https://images.unsplash.com/photo-1571896349842-33c89424de2d?q=80&w=1200",
            &[
                "Private Beach",
                "Infinity Pool",
                "La Maison 1888",
                "HARNN Heritage Spa",
                "Tennis Courts",
                "Kids Club",
                "Helipad",
                "Water Sports",
            ],
            vec![
                room(
                    1,
                    "Ocean View Room",
                    "Luxurious 70m² room with panoramic ocean views and traditional Vietnamese design elements",
                    420,
                    2,
                    &["Ocean view", "Private balcony", "Luxury bathroom", "Club access", "Evening cocktails"],
                    IMG_ROOM_OCEAN,
                ),
                room(
                    2,
                    "Ocean Pool Villa",
                    "Luxurious 150m² villa with private infinity pool and direct beach access",
                    880,
                    4,
                    &["Private infinity pool", "Direct beach access", "Outdoor dining area", "Personal butler", "Luxury spa bathroom"],
                    IMG_ROOM_SUITE,
                ),
                room(
                    3,
                    "Peninsula Suite",
                    "Ultimate 250m² luxury suite with panoramic views and exclusive amenities",
                    1200,
                    6,
                    &["Panoramic views", "Private pool", "Chef service", "Helicopter transfer", "Spa room"],
                    IMG_ROOM_GRAND,
                ),
            ],
        ),
        hotel(
            3,
            "Park Hyatt Saigon",
            "Elegant 5-star hotel in the heart of Saigon, blending colonial charm with modern luxury. Features world-class dining options and the tranquil Xuan Spa.",
            "District 1, Ho Chi Minh City",
            380,
            4.7,
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?q=80&w=1200",
            &[
                "Opera Restaurant",
                "Park Lounge",
                "Xuan Spa",
                "Outdoor Pool",
                "Fitness Center",
                "Business Center",
                "Afternoon Tea",
                "Concierge",
            ],
            vec![
                room(
                    1,
                    "Park Room",
                    "Sophisticated 45m² room with city views and modern amenities",
                    380,
                    2,
                    &["City view", "Marble bathroom", "Premium bedding", "Work desk", "Evening turndown"],
                    IMG_ROOM_OCEAN,
                ),
                room(
                    2,
                    "Park Suite",
                    "Sophisticated 70m² suite with city views and butler service",
                    580,
                    3,
                    &["Italian marble bathroom", "Walk-in closet", "Butler service", "Luxury spa access", "Evening canapes"],
                    IMG_ROOM_SUITE,
                ),
                room(
                    3,
                    "Presidential Suite",
                    "Luxurious 120m² suite with premium amenities and personalized service",
                    980,
                    4,
                    &["Living room", "Dining room", "Butler kitchen", "Private spa", "VIP services"],
                    IMG_ROOM_GRAND,
                ),
            ],
        ),
    ]
}

// Listing-only properties, no room inventory.
fn listing_hotels() -> Vec<Hotel> {
    vec![
        hotel(
            4,
            "Luxury Resort & Spa",
            "Experience luxury at its finest in our beachfront resort.",
            "Maldives",
            299,
            4.8,
            "https://images.unsplash.com/photo-1571896349842-33c89424de2d?q=80&w=1200",
            &["Free WiFi", "Swimming Pool", "Spa", "Restaurant"],
            Vec::new(),
        ),
        hotel(
            5,
            "Urban Boutique Hotel",
            "Modern comfort in the heart of the city.",
            "New York",
            199,
            4.5,
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?q=80&w=1200",
            &["Free WiFi", "Gym", "Restaurant", "Bar"],
            Vec::new(),
        ),
        hotel(
            6,
            "Mountain View Lodge",
            "Scenic mountain retreat with luxury amenities.",
            "Swiss Alps",
            249,
            4.7,
            "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?q=80&w=1200",
            &["Free WiFi", "Ski Access", "Spa", "Restaurant"],
            Vec::new(),
        ),
        hotel(
            7,
            "Seaside Paradise Resort",
            "Beachfront paradise with stunning ocean views.",
            "Bali",
            279,
            4.6,
            "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?q=80&w=1200",
            &["Free WiFi", "Private Beach", "Spa", "Restaurant"],
            Vec::new(),
        ),
        hotel(
            8,
            "Historic City Hotel",
            "Elegant hotel in a historic building with modern amenities.",
            "Paris",
            329,
            4.4,
            "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?q=80&w=1200",
            &["Free WiFi", "Restaurant", "Bar", "Concierge"],
            Vec::new(),
        ),
        hotel(
            9,
            "Desert Oasis Resort",
            "Luxury desert retreat with spectacular views.",
            "Dubai",
            399,
            4.9,
            "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?q=80&w=1200",
            &["Free WiFi", "Pool", "Spa", "Desert Tours"],
            Vec::new(),
        ),
    ]
}
