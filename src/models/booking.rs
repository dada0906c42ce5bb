use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Active,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Active => write!(f, "ACTIVE"),
            BookingStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A flat booking as exchanged with the flats backend. `id` stays empty until the
/// server assigns one and is left out of creation payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub flat_id: i64,
    pub user_id: i64,
    pub user_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    pub system: String,
}

impl Booking {
    pub fn new_active(
        flat_id: i64,
        user_id: i64,
        user_email: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        system: &str,
    ) -> Booking {
        Booking {
            id: None,
            flat_id,
            user_id,
            user_email,
            start_date,
            end_date,
            status: BookingStatus::Active,
            system: system.to_string(),
        }
    }
}
