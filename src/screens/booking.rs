use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use log::{debug, info};

use crate::clients::FlatsApi;
use crate::config::Config;
use crate::errors::ValidationError;
use crate::models::booking::Booking;
use crate::screens::{lock, Navigator};
use crate::services::email_store::{last_email, remember_email, KeyValueStore};
use crate::services::lifetime::ViewLifetime;
use crate::services::loader::{load_flat_summary, FlatSummary, Loadable};
use crate::services::validation::validate_booking;

pub const BOOKING_CONFIRMED: &str = "Booking confirmed!";
pub const BOOKING_FAILED_PREFIX: &str = "Booking failed";
pub const BOOKING_FAILED_GENERIC: &str = "An error occurred while submitting your booking.";

#[derive(Debug, Clone, Default)]
pub struct BookingFormState {
    pub flat: Loadable<FlatSummary>,
    pub email: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub submitting: bool,
    pub error_message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted(Booking),
    Invalid(ValidationError),
    Failed(String),
    /// A submission is already in flight; the confirm control is disabled.
    Busy,
    /// The screen was closed before the response arrived.
    Unmounted,
}

/// Booking form for a single flat.
pub struct BookingScreen {
    api: Arc<dyn FlatsApi>,
    store: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    flat_id: Option<i64>,
    user_id: i64,
    system_tag: String,
    state: Mutex<BookingFormState>,
    lifetime: ViewLifetime,
}

impl BookingScreen {
    pub fn new(
        api: Arc<dyn FlatsApi>,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        config: &Config,
        flat_id: Option<i64>,
    ) -> BookingScreen {
        let state = BookingFormState {
            email: last_email(store.as_ref()).unwrap_or_default(),
            ..BookingFormState::default()
        };

        BookingScreen {
            api,
            store,
            navigator,
            flat_id,
            user_id: config.user_id,
            system_tag: config.system_tag.clone(),
            state: Mutex::new(state),
            lifetime: ViewLifetime::new(),
        }
    }

    pub fn snapshot(&self) -> BookingFormState {
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

    pub fn is_submit_enabled(&self) -> bool {
        !lock(&self.state).submitting
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    pub async fn load_flat(&self) {
        let Some(flat_id) = self.flat_id else {
            return;
        };
        let flat = load_flat_summary(self.api.as_ref(), flat_id).await;
        if self.lifetime.is_alive() {
            lock(&self.state).flat = flat;
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let booking = {
            let mut state = lock(&self.state);
            if state.submitting {
                return SubmitOutcome::Busy;
            }

            let (form, flat_id) = match validate_booking(
                &state.email,
                state.start_date,
                state.end_date,
                self.flat_id,
            ) {
                Ok(valid) => valid,
                Err(e) => {
                    state.error_message = e.to_string();
                    return SubmitOutcome::Invalid(e);
                }
            };

            state.error_message.clear();
            state.submitting = true;
            Booking::new_active(
                flat_id,
                self.user_id,
                form.email,
                form.start_date,
                form.end_date,
                &self.system_tag,
            )
        };

        let result = self.api.create_booking(&booking).await;

        if let Ok(created) = &result {
            info!("Booking {:?} created for flat {}", created.id, created.flat_id);
            remember_email(self.store.as_ref(), &booking.user_email);
        }

        if !self.lifetime.is_alive() {
            debug!("Booking screen unmounted, dropping submission result");
            return SubmitOutcome::Unmounted;
        }

        match result {
            Ok(created) => {
                lock(&self.state).submitting = false;
                self.navigator.notify(BOOKING_CONFIRMED);
                self.navigator.back();
                SubmitOutcome::Submitted(created)
            }
            Err(e) => {
                let message = e.user_message(BOOKING_FAILED_PREFIX, BOOKING_FAILED_GENERIC);
                let mut state = lock(&self.state);
                state.submitting = false;
                state.error_message = message.clone();
                SubmitOutcome::Failed(message)
            }
        }
    }
}
