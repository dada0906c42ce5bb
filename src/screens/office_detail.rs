use std::sync::{Arc, Mutex};

use log::debug;

use crate::clients::OfficesApi;
use crate::models::office::Office;
use crate::screens::lock;
use crate::services::lifetime::ViewLifetime;
use crate::services::loader::{load_office, Loadable};

pub const OFFICE_DETAILS_ERROR: &str = "Error fetching office details.";

pub struct OfficeDetailScreen {
    api: Arc<dyn OfficesApi>,
    office_id: i64,
    state: Mutex<Loadable<Office>>,
    lifetime: ViewLifetime,
}

impl OfficeDetailScreen {
    pub fn new(api: Arc<dyn OfficesApi>, office_id: i64) -> OfficeDetailScreen {
        OfficeDetailScreen {
            api,
            office_id,
            state: Mutex::new(Loadable::Loading),
            lifetime: ViewLifetime::new(),
        }
    }

    pub fn snapshot(&self) -> Loadable<Office> {
        lock(&self.state).clone()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        lock(&self.state).is_failed().then_some(OFFICE_DETAILS_ERROR)
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    pub async fn load(&self) {
        let office = load_office(self.api.as_ref(), self.office_id).await;
        if !self.lifetime.is_alive() {
            debug!("Office detail {} unmounted, dropping response", self.office_id);
            return;
        }
        *lock(&self.state) = office;
    }

    pub fn reservation_target(&self) -> Option<i64> {
        match &*lock(&self.state) {
            Loadable::Loaded(office) => Some(office.id),
            _ => None,
        }
    }
}
