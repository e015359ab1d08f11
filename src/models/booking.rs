use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Id carried by a booking that has not been submitted yet.
pub const NEW_BOOKING_ID: &str = "new";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub hotel_name: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: u64,
    pub hotel_image: String,
    pub status: BookingStatus,
}

impl Booking {
    pub fn is_draft(&self) -> bool {
        self.id == NEW_BOOKING_ID
    }
}

/// Payload of the modify/new booking form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub id: String,
    pub hotel_id: Option<u32>,
    pub room_id: Option<u32>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 1, max = 4))]
    pub guests: u32,
    #[serde(default)]
    pub special_requests: String,
}

impl BookingSubmission {
    pub fn is_new(&self) -> bool {
        self.id == NEW_BOOKING_ID
    }
}

/// Number of nights between two dates, rejecting ranges where check-out
/// is not strictly after check-in.
pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> Result<u64, AppError> {
    if check_out <= check_in {
        return Err(AppError::InvalidDateRange);
    }
    Ok((check_out - check_in).num_days() as u64)
}

/// Same check for forms where either date may still be blank.
pub fn validate_optional_range(
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> Result<(), AppError> {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => stay_nights(check_in, check_out).map(|_| ()),
        _ => Ok(()),
    }
}
