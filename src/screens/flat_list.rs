use std::sync::{Arc, Mutex};

use log::{debug, error};

use crate::clients::FlatsApi;
use crate::errors::ValidationError;
use crate::models::flat::{Flat, FlatFilter};
use crate::screens::lock;
use crate::services::lifetime::{RequestSequencer, ViewLifetime};
use crate::services::validation::{parse_filter_inputs, FilterInputs};

pub const NO_FLATS_MESSAGE: &str = "No flats found.";

#[derive(Debug, Clone, Default)]
pub struct FlatListState {
    pub flats: Vec<Flat>,
    pub loading: bool,
    pub filters: FilterInputs,
    pub message: Option<String>,
}

impl FlatListState {
    /// Placeholder line for an empty, settled list.
    pub fn empty_message(&self) -> Option<&'static str> {
        (!self.loading && self.flats.is_empty()).then_some(NO_FLATS_MESSAGE)
    }
}

pub struct FlatListScreen {
    api: Arc<dyn FlatsApi>,
    state: Mutex<FlatListState>,
    sequencer: RequestSequencer,
    lifetime: ViewLifetime,
}

impl FlatListScreen {
    pub fn new(api: Arc<dyn FlatsApi>) -> FlatListScreen {
        FlatListScreen {
            api,
            state: Mutex::new(FlatListState::default()),
            sequencer: RequestSequencer::new(),
            lifetime: ViewLifetime::new(),
        }
    }

    pub fn snapshot(&self) -> FlatListState {
        lock(&self.state).clone()
    }

    pub fn set_filters(&self, filters: FilterInputs) {
        lock(&self.state).filters = filters;
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    /// Initial unfiltered load.
    pub async fn mount(&self) {
        self.fetch(None).await;
    }

    pub async fn apply_filters(&self) -> Result<(), ValidationError> {
        let inputs = lock(&self.state).filters.clone();
        let filter = match parse_filter_inputs(&inputs) {
            Ok(filter) => filter,
            Err(e) => {
                lock(&self.state).message = Some(e.to_string());
                return Err(e);
            }
        };
        self.fetch(Some(filter)).await;
        Ok(())
    }

    async fn fetch(&self, filter: Option<FlatFilter>) {
        let ticket = self.sequencer.issue();
        {
            let mut state = lock(&self.state);
            state.loading = true;
            state.message = None;
        }

        let result = match &filter {
            None => self.api.list_flats().await,
            Some(filter) => self.api.filter_flats(filter).await,
        };

        if !self.lifetime.is_alive() {
            debug!("Flat list unmounted, dropping response #{ticket}");
            return;
        }
        if !self.sequencer.is_latest(ticket) {
            debug!("Discarding stale flat list response #{ticket}");
            return;
        }

        let mut state = lock(&self.state);
        match result {
            Ok(flats) => state.flats = flats,
            Err(e) => error!("Error fetching flats: {e}"),
        }
        state.loading = false;
    }
}
