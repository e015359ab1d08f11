use chrono::{Days, NaiveDate};
use tracing::{info, warn};

use crate::catalog::{Catalog, DEFAULT_HOTEL_IMAGE};
use crate::error::AppError;
use crate::models::booking::stay_nights;
use crate::models::{Booking, BookingStatus, BookingSubmission, NEW_BOOKING_ID};

/// Fields the modify form is allowed to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayChange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl From<&BookingSubmission> for StayChange {
    fn from(submission: &BookingSubmission) -> Self {
        StayChange {
            check_in: submission.check_in,
            check_out: submission.check_out,
            guests: submission.guests,
        }
    }
}

/// One user intent against the ledger.
#[derive(Debug, Clone)]
pub enum BookingCommand {
    Create { draft: Booking, stay: StayChange },
    Modify { id: String, stay: StayChange },
    Cancel { id: String },
}

impl BookingCommand {
    /// Routes a form submission: the sentinel id creates, anything else modifies.
    pub fn from_submission(submission: &BookingSubmission, catalog: &Catalog, today: NaiveDate) -> Self {
        let stay = StayChange::from(submission);
        if submission.is_new() {
            BookingCommand::Create {
                draft: draft_booking(catalog, submission.hotel_id, submission.room_id, today),
                stay,
            }
        } else {
            BookingCommand::Modify {
                id: submission.id.clone(),
                stay,
            }
        }
    }
}

/// Unsubmitted booking opened by the "Book Now" navigation.
pub fn draft_booking(catalog: &Catalog, hotel_id: Option<u32>, room_id: Option<u32>, today: NaiveDate) -> Booking {
    let hotel = hotel_id.and_then(|id| catalog.hotel(id));
    let room = hotel.zip(room_id).and_then(|(hotel, id)| hotel.room(id));

    Booking {
        id: NEW_BOOKING_ID.to_string(),
        hotel_name: hotel.map_or_else(|| "New Booking".to_string(), |h| h.name.clone()),
        room_type: room.map_or_else(|| "Standard Room".to_string(), |r| r.name.clone()),
        check_in: today,
        check_out: today.checked_add_days(Days::new(1)).unwrap_or(today),
        guests: 1,
        total_price: 0,
        hotel_image: hotel.map_or_else(|| DEFAULT_HOTEL_IMAGE.to_string(), |h| h.image.clone()),
        status: BookingStatus::Upcoming,
    }
}

/// Bookings owned by a single session, in insertion order.
#[derive(Debug, Clone)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
    nightly_rate: u64,
}

impl BookingLedger {
    pub fn new(nightly_rate: u64, seed: Vec<Booking>) -> Self {
        Self {
            bookings: seed,
            nightly_rate,
        }
    }

    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|booking| booking.id == id)
    }

    pub fn total_price(&self, check_in: NaiveDate, check_out: NaiveDate) -> Result<u64, AppError> {
        stay_nights(check_in, check_out)?
            .checked_mul(self.nightly_rate)
            .ok_or(AppError::PriceOutOfRange)
    }

    pub fn dispatch(&mut self, command: BookingCommand) -> Result<Option<Booking>, AppError> {
        match command {
            BookingCommand::Create { draft, stay } => self.create(draft, stay).map(Some),
            BookingCommand::Modify { id, stay } => self.modify(&id, stay),
            BookingCommand::Cancel { id } => Ok(self.cancel(&id)),
        }
    }

    pub fn create(&mut self, draft: Booking, stay: StayChange) -> Result<Booking, AppError> {
        let total_price = self.total_price(stay.check_in, stay.check_out).inspect_err(|err| {
            warn!("Rejected new booking ({} to {}): {}", stay.check_in, stay.check_out, err);
        })?;

        let booking = Booking {
            id: (self.bookings.len() + 1).to_string(),
            check_in: stay.check_in,
            check_out: stay.check_out,
            guests: stay.guests,
            total_price,
            status: BookingStatus::Upcoming,
            ..draft
        };
        info!(
            "Booking {} created for {} ({} to {}, total ${})",
            booking.id, booking.hotel_name, booking.check_in, booking.check_out, booking.total_price
        );
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    /// Rewrites dates and guests only. Unknown ids are a no-op.
    pub fn modify(&mut self, id: &str, stay: StayChange) -> Result<Option<Booking>, AppError> {
        stay_nights(stay.check_in, stay.check_out).inspect_err(|_| {
            warn!("Rejected change to booking {}: invalid date range", id);
        })?;

        let Some(booking) = self.bookings.iter_mut().find(|booking| booking.id == id) else {
            return Ok(None);
        };
        booking.check_in = stay.check_in;
        booking.check_out = stay.check_out;
        booking.guests = stay.guests;
        info!("Booking {} modified", id);
        Ok(Some(booking.clone()))
    }

    /// Upcoming bookings become cancelled; other states are left as they are.
    pub fn cancel(&mut self, id: &str) -> Option<Booking> {
        let booking = self.bookings.iter_mut().find(|booking| booking.id == id)?;
        if booking.status == BookingStatus::Upcoming {
            booking.status = BookingStatus::Cancelled;
            info!("Booking {} cancelled", id);
        }
        Some(booking.clone())
    }
}
