pub mod booking;
pub mod booking_card;
pub mod flat_detail;
pub mod flat_list;
pub mod my_bookings;
pub mod office_booking;
pub mod office_detail;
pub mod office_list;

use std::sync::{Mutex, MutexGuard};

/// Side effects a screen can ask of whatever hosts it.
pub trait Navigator: Send + Sync {
    /// Leave the current screen.
    fn back(&self);

    /// Transient confirmation, shown once.
    fn notify(&self, message: &str);

    fn open_flat(&self, flat_id: i64);
}

/// State locks are only held between suspension points, so a poisoned lock still
/// holds consistent data.
pub(crate) fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}
