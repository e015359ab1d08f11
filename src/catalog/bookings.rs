use chrono::NaiveDate;

use crate::models::{Booking, BookingStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Bookings every new session starts with.
pub fn seed_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "1".to_string(),
            hotel_name: "Sofitel Legend Metropole Hanoi".to_string(),
            room_type: "Premium Room".to_string(),
            check_in: date(2024, 3, 20),
            check_out: date(2024, 3, 25),
            guests: 2,
            total_price: 1750,
            hotel_image: super::DEFAULT_HOTEL_IMAGE.to_string(),
            status: BookingStatus::Upcoming,
        },
        Booking {
            id: "2".to_string(),
            hotel_name: "InterContinental Danang Sun Peninsula".to_string(),
            room_type: "Ocean View Room".to_string(),
            check_in: date(2024, 4, 15),
            check_out: date(2024, 4, 18),
            guests: 2,
            total_price: 1350,
            hotel_image: "https://images.unsplash.com/photo-1571003123894-1f0594d2b5d9?q=80&w=1200"
                .to_string(),
            status: BookingStatus::Upcoming,
        },
    ]
}
