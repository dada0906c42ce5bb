use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use log::{debug, info};

use crate::clients::OfficesApi;
use crate::errors::ValidationError;
use crate::models::office::Office;
use crate::models::reservation::Reservation;
use crate::screens::{lock, Navigator};
use crate::services::lifetime::ViewLifetime;
use crate::services::loader::{load_office, Loadable};
use crate::services::validation::validate_reservation;

pub const OFFICE_BOOKED: &str = "Office booked successfully!";
pub const RESERVATION_FAILED_PREFIX: &str = "Booking request failed";
pub const RESERVATION_FAILED_GENERIC: &str = "Error processing booking.";

#[derive(Debug, Clone, Default)]
pub struct ReservationFormState {
    pub office: Loadable<Office>,
    pub email: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub submitting: bool,
    pub error_message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReserveOutcome {
    Reserved(Reservation),
    Invalid(ValidationError),
    Failed(String),
    Busy,
    Unmounted,
}

pub struct OfficeBookingScreen {
    api: Arc<dyn OfficesApi>,
    navigator: Arc<dyn Navigator>,
    office_id: Option<i64>,
    state: Mutex<ReservationFormState>,
    lifetime: ViewLifetime,
}

impl OfficeBookingScreen {
    pub fn new(
        api: Arc<dyn OfficesApi>,
        navigator: Arc<dyn Navigator>,
        office_id: Option<i64>,
    ) -> OfficeBookingScreen {
        OfficeBookingScreen {
            api,
            navigator,
            office_id,
            state: Mutex::new(ReservationFormState::default()),
            lifetime: ViewLifetime::new(),
        }
    }

    pub fn snapshot(&self) -> ReservationFormState {
        lock(&self.state).clone()
    }

    pub fn set_email(&self, email: &str) {
        lock(&self.state).email = email.to_string();
    }

    pub fn set_start_date(&self, date: NaiveDate) {
        lock(&self.state).start_date = Some(date);
    }

    pub fn set_end_date(&self, date: NaiveDate) {
        lock(&self.state).end_date = Some(date);
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    pub async fn load_office(&self) {
        let Some(office_id) = self.office_id else {
            return;
        };
        let office = load_office(self.api.as_ref(), office_id).await;
        if self.lifetime.is_alive() {
            lock(&self.state).office = office;
        }
    }

    pub async fn submit(&self) -> ReserveOutcome {
        let (office_id, reservation) = {
            let mut state = lock(&self.state);
            if state.submitting {
                return ReserveOutcome::Busy;
            }

            let (form, office_id) = match validate_reservation(
                &state.email,
                state.start_date,
                state.end_date,
                self.office_id,
            ) {
                Ok(valid) => valid,
                Err(e) => {
                    state.error_message = e.to_string();
                    return ReserveOutcome::Invalid(e);
                }
            };

            state.error_message.clear();
            state.submitting = true;
            (
                office_id,
                Reservation::pending(office_id, form.start_date, form.end_date),
            )
        };

        let result = self.api.create_reservation(office_id, &reservation).await;

        if !self.lifetime.is_alive() {
            debug!("Office booking screen unmounted, dropping reservation result");
            return ReserveOutcome::Unmounted;
        }

        match result {
            Ok(created) => {
                info!("Reservation created for office {office_id}");
                lock(&self.state).submitting = false;
                self.navigator.notify(OFFICE_BOOKED);
                self.navigator.back();
                ReserveOutcome::Reserved(created.unwrap_or(reservation))
            }
            Err(e) => {
                let message =
                    e.user_message(RESERVATION_FAILED_PREFIX, RESERVATION_FAILED_GENERIC);
                let mut state = lock(&self.state);
                state.submitting = false;
                state.error_message = message.clone();
                ReserveOutcome::Failed(message)
            }
        }
    }
}
