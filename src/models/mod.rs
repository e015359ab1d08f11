pub mod booking;
pub mod chat;
pub mod forms;
pub mod hotel;

pub use booking::{Booking, BookingStatus, BookingSubmission, NEW_BOOKING_ID};
pub use chat::{ChatMessage, Sender};
pub use hotel::{Hotel, HotelSummary, Room};
