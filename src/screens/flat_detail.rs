use std::sync::{Arc, Mutex};

use log::debug;

use crate::clients::FlatsApi;
use crate::models::flat::Flat;
use crate::screens::lock;
use crate::services::lifetime::ViewLifetime;
use crate::services::loader::{load_flat, Loadable};

pub struct FlatDetailScreen {
    api: Arc<dyn FlatsApi>,
    flat_id: i64,
    state: Mutex<Loadable<Flat>>,
    lifetime: ViewLifetime,
}

impl FlatDetailScreen {
    pub fn new(api: Arc<dyn FlatsApi>, flat_id: i64) -> FlatDetailScreen {
        FlatDetailScreen {
            api,
            flat_id,
            state: Mutex::new(Loadable::Loading),
            lifetime: ViewLifetime::new(),
        }
    }

    pub fn snapshot(&self) -> Loadable<Flat> {
        lock(&self.state).clone()
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    pub fn unmount(&self) {
        self.lifetime.end();
    }

    pub async fn load(&self) {
        let flat = load_flat(self.api.as_ref(), self.flat_id).await;
        if !self.lifetime.is_alive() {
            debug!("Flat detail {} unmounted, dropping response", self.flat_id);
            return;
        }
        *lock(&self.state) = flat;
    }

    /// Flat id to hand to the booking form; none until a real flat has loaded.
    pub fn booking_target(&self) -> Option<i64> {
        match &*lock(&self.state) {
            Loadable::Loaded(flat) => Some(flat.id),
            _ => None,
        }
    }
}
