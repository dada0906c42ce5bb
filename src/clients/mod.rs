pub mod flats_client;
pub mod helpers;
pub mod offices_client;

pub use flats_client::{FlatsApi, FlatsClient};
pub use offices_client::{OfficesApi, OfficesClient};
