use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

/// Token shared between a view and the requests it issues. Once the view is
/// unmounted, late responses must not touch its state.
#[derive(Debug, Clone)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> ViewLifetime {
        ViewLifetime {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        ViewLifetime::new()
    }
}

/// Hands out monotonically increasing tickets so that only the response to the most
/// recently issued request is applied.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> RequestSequencer {
        RequestSequencer::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Acquire) == ticket
    }
}
