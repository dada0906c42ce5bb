use serde::{Deserialize, Serialize};
use serde_this_or_that::as_f64;

use super::null_as_default;

pub const UNKNOWN_FLAT_NAME: &str = "Unknown Flat";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flat {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(deserialize_with = "as_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default)]
    pub room_number: i32,
}

impl Flat {
    /// Stand-in shown when a flat could not be fetched.
    pub fn unknown(id: i64) -> Flat {
        Flat {
            id,
            name: String::from(UNKNOWN_FLAT_NAME),
            location: String::from(""),
            price: 0.0,
            description: String::from(""),
            distance: None,
            amenities: Vec::new(),
            availability: String::from(""),
            images: Vec::new(),
            room_number: 0,
        }
    }

    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Optional search criteria for `/api/flats/filter`. Unset criteria are left out of
/// the query string entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatFilter {
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub room_number: Option<i32>,
    pub max_distance: Option<f64>,
}

impl FlatFilter {
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params: Vec<(&'static str, String)> = Vec::new();
        if let Some(location) = self.location.as_ref().filter(|l| !l.is_empty()) {
            params.push(("location", location.clone()));
        }
        if let Some(min_price) = self.min_price {
            params.push(("minPrice", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push(("maxPrice", max_price.to_string()));
        }
        if let Some(room_number) = self.room_number {
            params.push(("roomNumber", room_number.to_string()));
        }
        if let Some(max_distance) = self.max_distance {
            params.push(("maxDistance", max_distance.to_string()));
        }
        params
    }
}
