#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use tokio::sync::Notify;

use flatly::clients::{FlatsApi, OfficesApi};
use flatly::errors::{ApiError, StoreError};
use flatly::models::booking::{Booking, BookingStatus};
use flatly::models::flat::{Flat, FlatFilter};
use flatly::models::office::{Office, OfficeImage};
use flatly::models::reservation::Reservation;
use flatly::screens::Navigator;
use flatly::services::email_store::KeyValueStore;

pub const FLATS_BASE_URL: &str = "http://flats.test";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn status_error(code: u16, body: &str) -> ApiError {
    ApiError::Status {
        status: StatusCode::from_u16(code).unwrap(),
        body: body.to_string(),
    }
}

/// Any failure that is neither a status nor a transport error.
pub fn garbled_response() -> ApiError {
    ApiError::Decode(serde_json::from_str::<Flat>("<html>").unwrap_err())
}

pub fn sample_flat(id: i64, name: &str) -> Flat {
    Flat {
        id,
        name: name.to_string(),
        location: "Kraków".to_string(),
        price: 2400.0,
        description: "Bright two-room flat".to_string(),
        distance: Some(1.5),
        amenities: vec!["WiFi".to_string(), "Balcony".to_string()],
        availability: "From March".to_string(),
        images: vec!["uploads/flat-1.jpg".to_string()],
        room_number: 2,
    }
}

pub fn sample_booking(id: i64, flat_id: i64, email: &str) -> Booking {
    Booking {
        id: Some(id),
        flat_id,
        user_id: 1,
        user_email: email.to_string(),
        start_date: date(2025, 3, 1),
        end_date: date(2025, 3, 10),
        status: BookingStatus::Active,
        system: "Flatly".to_string(),
    }
}

pub fn sample_office(id: i64, name: &str) -> Office {
    Office {
        id,
        name: name.to_string(),
        metric_area: Some(42.0),
        floor: Some(3),
        room_number: Some(301),
        country: "Poland".to_string(),
        city: "Warsaw".to_string(),
        postal_code: "00-001".to_string(),
        address: "Marszałkowska 1".to_string(),
        price: 120.0,
        images: vec![OfficeImage {
            id: 1,
            data: Some("iVBORw0KGgo=".to_string()),
        }],
        amenities: vec!["Projector".to_string()],
    }
}

#[derive(Default)]
pub struct FakeFlatsApi {
    pub flats: Mutex<Vec<Flat>>,
    pub filtered: Mutex<Vec<Flat>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub create_failure: Mutex<Option<(u16, String)>>,
    pub cancel_failure: Mutex<Option<(u16, String)>>,
    pub cancel_echo: Mutex<Option<Booking>>,
    pub list_gate: Mutex<Option<Arc<Notify>>>,
    pub created: Mutex<Vec<Booking>>,
    pub cancelled: Mutex<Vec<i64>>,
    pub filter_calls: Mutex<Vec<FlatFilter>>,
    pub flat_lookups: Mutex<Vec<i64>>,
    pub list_calls: AtomicUsize,
}

impl FakeFlatsApi {
    pub fn with_flats(flats: Vec<Flat>) -> FakeFlatsApi {
        let api = FakeFlatsApi::default();
        *api.flats.lock().unwrap() = flats;
        api
    }

    pub fn create_calls(&self) -> usize {
        self.created.lock().unwrap().len()
    }
}

#[async_trait]
impl FlatsApi for FakeFlatsApi {
    async fn list_flats(&self) -> Result<Vec<Flat>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.list_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(self.flats.lock().unwrap().clone())
    }

    async fn filter_flats(&self, filter: &FlatFilter) -> Result<Vec<Flat>, ApiError> {
        self.filter_calls.lock().unwrap().push(filter.clone());
        Ok(self.filtered.lock().unwrap().clone())
    }

    async fn get_flat(&self, id: i64) -> Result<Flat, ApiError> {
        self.flat_lookups.lock().unwrap().push(id);
        self.flats
            .lock()
            .unwrap()
            .iter()
            .find(|flat| flat.id == id)
            .cloned()
            .ok_or_else(|| status_error(404, "Flat not found"))
    }

    async fn get_booking(&self, id: i64) -> Result<Booking, ApiError> {
        self.bookings
            .lock()
            .unwrap()
            .iter()
            .find(|booking| booking.id == Some(id))
            .cloned()
            .ok_or_else(|| status_error(404, "Booking not found"))
    }

    async fn active_bookings(&self, user_email: &str) -> Result<Vec<Booking>, ApiError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_email == user_email && b.status == BookingStatus::Active)
            .cloned()
            .collect())
    }

    async fn create_booking(&self, booking: &Booking) -> Result<Booking, ApiError> {
        let id = {
            let mut created = self.created.lock().unwrap();
            created.push(booking.clone());
            created.len() as i64
        };
        // Stay in flight for one scheduler turn.
        tokio::task::yield_now().await;

        if let Some((code, body)) = self.create_failure.lock().unwrap().clone() {
            return Err(status_error(code, &body));
        }
        let mut created = booking.clone();
        created.id = Some(id);
        Ok(created)
    }

    async fn cancel_booking(&self, id: i64) -> Result<Option<Booking>, ApiError> {
        self.cancelled.lock().unwrap().push(id);
        tokio::task::yield_now().await;

        if let Some((code, body)) = self.cancel_failure.lock().unwrap().clone() {
            return Err(status_error(code, &body));
        }
        Ok(self.cancel_echo.lock().unwrap().clone())
    }

    fn base_url(&self) -> &str {
        FLATS_BASE_URL
    }
}

#[derive(Default)]
pub struct FakeOfficesApi {
    pub offices: Mutex<Vec<Office>>,
    pub reservation_failure: Mutex<Option<(u16, String)>>,
    pub reservations: Mutex<Vec<(i64, Reservation)>>,
}

impl FakeOfficesApi {
    pub fn with_offices(offices: Vec<Office>) -> FakeOfficesApi {
        let api = FakeOfficesApi::default();
        *api.offices.lock().unwrap() = offices;
        api
    }
}

#[async_trait]
impl OfficesApi for FakeOfficesApi {
    async fn list_offices(&self) -> Result<Vec<Office>, ApiError> {
        Ok(self.offices.lock().unwrap().clone())
    }

    async fn get_office(&self, id: i64) -> Result<Office, ApiError> {
        self.offices
            .lock()
            .unwrap()
            .iter()
            .find(|office| office.id == id)
            .cloned()
            .ok_or_else(garbled_response)
    }

    async fn create_reservation(
        &self,
        office_id: i64,
        reservation: &Reservation,
    ) -> Result<Option<Reservation>, ApiError> {
        self.reservations
            .lock()
            .unwrap()
            .push((office_id, reservation.clone()));
        tokio::task::yield_now().await;

        if let Some((code, body)) = self.reservation_failure.lock().unwrap().clone() {
            return Err(status_error(code, &body));
        }
        Ok(None)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub entries: Mutex<HashMap<String, String>>,
    pub writes: AtomicUsize,
    pub fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> MemoryStore {
        let store = MemoryStore::default();
        store
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub backs: AtomicUsize,
    pub notices: Mutex<Vec<String>>,
    pub opened: Mutex<Vec<i64>>,
}

impl RecordingNavigator {
    pub fn backs(&self) -> usize {
        self.backs.load(Ordering::SeqCst)
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn back(&self) {
        self.backs.fetch_add(1, Ordering::SeqCst);
    }

    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    fn open_flat(&self, flat_id: i64) {
        self.opened.lock().unwrap().push(flat_id);
    }
}
