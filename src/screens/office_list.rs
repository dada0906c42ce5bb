use std::sync::{Arc, Mutex};

use log::{debug, error};

use crate::clients::OfficesApi;
use crate::models::office::Office;
use crate::screens::lock;
use crate::services::lifetime::{RequestSequencer, ViewLifetime};

pub const NO_OFFICES_MESSAGE: &str = "No offices available.";

#[derive(Debug, Clone, Default)]
pub struct OfficeListState {
    pub offices: Vec<Office>,
    pub loading: bool,
    pub refreshing: bool,
}

pub struct OfficeListScreen {
    api: Arc<dyn OfficesApi>,
    state: Mutex<OfficeListState>,
    sequencer: RequestSequencer,
    lifetime: ViewLifetime,
}

impl OfficeListScreen {
    pub fn new(api: Arc<dyn OfficesApi>) -> OfficeListScreen {
        OfficeListScreen {
            api,
            state: Mutex::new(OfficeListState::default()),
            sequencer: RequestSequencer::new(),
            lifetime: ViewLifetime::new(),
        }
    }

    pub fn snapshot(&self) -> OfficeListState {
        lock(&self.state).clone()
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    pub async fn mount(&self) {
        lock(&self.state).loading = true;
        self.fetch().await;
    }

    /// Pull-to-refresh: same request, separate busy flag.
    pub async fn refresh(&self) {
        lock(&self.state).refreshing = true;
        self.fetch().await;
    }

    async fn fetch(&self) {
        let ticket = self.sequencer.issue();
        let result = self.api.list_offices().await;

        if !self.lifetime.is_alive() || !self.sequencer.is_latest(ticket) {
            debug!("Dropping offices response #{ticket}");
            return;
        }

        let mut state = lock(&self.state);
        match result {
            Ok(offices) => state.offices = offices,
            Err(e) => error!("Error fetching offices: {e}"),
        }
        state.loading = false;
        state.refreshing = false;
    }
}
