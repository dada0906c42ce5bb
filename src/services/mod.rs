pub mod email_store;
pub mod lifetime;
pub mod loader;
pub mod validation;
