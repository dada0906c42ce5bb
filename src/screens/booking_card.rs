use std::sync::{Arc, Mutex};

use log::debug;

use crate::clients::FlatsApi;
use crate::errors::ValidationError;
use crate::models::booking::Booking;
use crate::screens::{lock, Navigator};
use crate::services::lifetime::ViewLifetime;
use crate::services::loader::{load_flat_summary, FlatSummary, Loadable};

pub const CANCEL_SUCCESS: &str = "Booking cancelled successfully.";
pub const CANCEL_FAILED_PREFIX: &str = "Cancellation failed";
pub const CANCEL_FAILED_GENERIC: &str = "Cancellation failed.";
pub const FLAT_DETAILS_UNAVAILABLE: &str = "Flat details are not available for this booking.";

#[derive(Debug, Clone)]
pub struct BookingCardState {
    pub booking: Booking,
    pub flat: Loadable<FlatSummary>,
    pub loading: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    Cancelled,
    Invalid(ValidationError),
    Failed(String),
    Busy,
    Unmounted,
}

pub struct BookingCard {
    api: Arc<dyn FlatsApi>,
    navigator: Arc<dyn Navigator>,
    state: Mutex<BookingCardState>,
    lifetime: ViewLifetime,
}

impl BookingCard {
    pub fn new(
        api: Arc<dyn FlatsApi>,
        navigator: Arc<dyn Navigator>,
        booking: Booking,
    ) -> BookingCard {
        BookingCard {
            api,
            navigator,
            state: Mutex::new(BookingCardState {
                booking,
                flat: Loadable::Loading,
                loading: false,
                message: String::new(),
            }),
            lifetime: ViewLifetime::new(),
        }
    }

    pub fn snapshot(&self) -> BookingCardState {
        lock(&self.state).clone()
    }

    pub fn booking_id(&self) -> Option<i64> {
        lock(&self.state).booking.id
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    pub async fn load_flat(&self) {
        let flat_id = lock(&self.state).booking.flat_id;
        if flat_id <= 0 {
            debug!("Booking has no flat, skipping flat lookup");
            lock(&self.state).flat = Loadable::Failed(FlatSummary::unknown());
            return;
        }
        let flat = load_flat_summary(self.api.as_ref(), flat_id).await;
        if self.lifetime.is_alive() {
            lock(&self.state).flat = flat;
        }
    }

    /// Requests cancellation. `on_cancel` runs only after the backend accepted it.
    pub async fn cancel(&self, on_cancel: impl FnOnce()) -> CancelOutcome {
        let booking_id = {
            let mut state = lock(&self.state);
            if state.loading {
                return CancelOutcome::Busy;
            }
            state.message.clear();

            let Some(booking_id) = state.booking.id else {
                let e = ValidationError::MissingBookingId;
                state.message = e.to_string();
                return CancelOutcome::Invalid(e);
            };
            state.loading = true;
            booking_id
        };

        let result = self.api.cancel_booking(booking_id).await;

        if !self.lifetime.is_alive() {
            debug!("Booking card {booking_id} unmounted, dropping cancel result");
            return CancelOutcome::Unmounted;
        }

        match result {
            Ok(updated) => {
                {
                    let mut state = lock(&self.state);
                    if let Some(updated) = updated {
                        state.booking = updated;
                    }
                    state.message = CANCEL_SUCCESS.to_string();
                    state.loading = false;
                }
                on_cancel();
                CancelOutcome::Cancelled
            }
            Err(e) => {
                let message = e.user_message(CANCEL_FAILED_PREFIX, CANCEL_FAILED_GENERIC);
                let mut state = lock(&self.state);
                state.message = message.clone();
                state.loading = false;
                CancelOutcome::Failed(message)
            }
        }
    }

    pub fn view_flat_details(&self) {
        let flat_id = lock(&self.state).booking.flat_id;
        if flat_id > 0 {
            self.navigator.open_flat(flat_id);
        } else {
            lock(&self.state).message = FLAT_DETAILS_UNAVAILABLE.to_string();
        }
    }
}
