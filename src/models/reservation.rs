use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const PAYMENT_TYPE_CARD: &str = "CARD";
pub const DEFAULT_COMMENTS: &str = "No special requests";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub office_id: i64,
    pub start_time: NaiveDate,
    pub end_time: NaiveDate,
    pub status: ReservationStatus,
    pub payment_type: String,
    pub comments: String,
    pub paid: bool,
}

impl Reservation {
    /// Fresh card-paid reservation, unpaid and pending until the backend confirms it.
    pub fn pending(office_id: i64, start_time: NaiveDate, end_time: NaiveDate) -> Reservation {
        Reservation {
            office_id,
            start_time,
            end_time,
            status: ReservationStatus::Pending,
            payment_type: PAYMENT_TYPE_CARD.to_string(),
            comments: DEFAULT_COMMENTS.to_string(),
            paid: false,
        }
    }
}
