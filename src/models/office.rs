use serde::{Deserialize, Serialize};
use serde_this_or_that::as_f64;

use super::null_as_default;

pub const UNKNOWN_OFFICE_NAME: &str = "Unknown Office";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeImage {
    pub id: i64,
    /// Inline base64 PNG payload.
    pub data: Option<String>,
}

impl OfficeImage {
    pub fn data_uri(&self) -> Option<String> {
        self.data
            .as_ref()
            .map(|data| format!("data:image/png;base64,{data}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub metric_area: Option<f64>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub room_number: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    /// Daily price.
    #[serde(deserialize_with = "as_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<OfficeImage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,
}

impl Office {
    pub fn unknown(id: i64) -> Office {
        Office {
            id,
            name: String::from(UNKNOWN_OFFICE_NAME),
            metric_area: None,
            floor: None,
            room_number: None,
            country: String::from(""),
            city: String::from(""),
            postal_code: String::from(""),
            address: String::from(""),
            price: 0.0,
            images: Vec::new(),
            amenities: Vec::new(),
        }
    }

    pub fn thumbnail(&self) -> Option<String> {
        self.images.first().and_then(OfficeImage::data_uri)
    }
}
