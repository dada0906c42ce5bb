use std::sync::{Arc, Mutex};

use futures::future::join_all;
use log::{debug, error};

use crate::clients::FlatsApi;
use crate::screens::booking_card::{BookingCard, CancelOutcome};
use crate::screens::{lock, Navigator};
use crate::services::lifetime::{RequestSequencer, ViewLifetime};

pub const NO_BOOKINGS_MESSAGE: &str = "No active bookings.";

#[derive(Default)]
struct MyBookingsState {
    cards: Vec<Arc<BookingCard>>,
    loading: bool,
}

/// Active bookings of one user, each row rendered as a `BookingCard`.
pub struct MyBookingsScreen {
    api: Arc<dyn FlatsApi>,
    navigator: Arc<dyn Navigator>,
    user_email: String,
    state: Mutex<MyBookingsState>,
    sequencer: RequestSequencer,
    lifetime: ViewLifetime,
}

impl MyBookingsScreen {
    pub fn new(
        api: Arc<dyn FlatsApi>,
        navigator: Arc<dyn Navigator>,
        user_email: &str,
    ) -> MyBookingsScreen {
        MyBookingsScreen {
            api,
            navigator,
            user_email: user_email.to_string(),
            state: Mutex::new(MyBookingsState::default()),
            sequencer: RequestSequencer::new(),
            lifetime: ViewLifetime::new(),
        }
    }

    pub fn cards(&self) -> Vec<Arc<BookingCard>> {
        lock(&self.state).cards.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        let state = lock(&self.state);
        (!state.loading && state.cards.is_empty()).then_some(NO_BOOKINGS_MESSAGE)
    }

    pub fn unmount(&self) {
        self.lifetime.end();
        for card in self.cards() {
            card.unmount();
        }
    }

    /// Fetches the list, then resolves every row's flat concurrently.
    pub async fn refresh(&self) {
        let ticket = self.sequencer.issue();
        lock(&self.state).loading = true;

        let result = self.api.active_bookings(&self.user_email).await;

        if !self.lifetime.is_alive() || !self.sequencer.is_latest(ticket) {
            debug!("Dropping bookings response #{ticket}");
            return;
        }

        let cards = match result {
            Ok(bookings) => bookings
                .into_iter()
                .map(|booking| {
                    Arc::new(BookingCard::new(
                        self.api.clone(),
                        self.navigator.clone(),
                        booking,
                    ))
                })
                .collect::<Vec<_>>(),
            Err(e) => {
                error!("Error fetching bookings for {}: {e}", self.user_email);
                lock(&self.state).loading = false;
                return;
            }
        };

        {
            let mut state = lock(&self.state);
            for old in state.cards.drain(..) {
                old.unmount();
            }
            state.cards = cards.clone();
            state.loading = false;
        }

        join_all(cards.iter().map(|card| card.load_flat())).await;
    }

    /// Cancels one row; a successful cancel removes it from the list.
    pub async fn cancel(&self, booking_id: i64) -> Option<CancelOutcome> {
        let card = self
            .cards()
            .into_iter()
            .find(|card| card.booking_id() == Some(booking_id))?;

        let outcome = card.cancel(|| self.remove(booking_id)).await;
        Some(outcome)
    }

    fn remove(&self, booking_id: i64) {
        lock(&self.state)
            .cards
            .retain(|card| card.booking_id() != Some(booking_id));
    }
}
