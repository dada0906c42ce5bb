use std::future::Future;

use log::error;

use crate::clients::helpers::resolve_image_url;
use crate::clients::{FlatsApi, OfficesApi};
use crate::errors::ApiError;
use crate::models::flat::{Flat, UNKNOWN_FLAT_NAME};
use crate::models::office::Office;

/// State of a resource resolved by id. A failed fetch still carries a value: the
/// placeholder that is rendered instead of an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Loaded(T),
    Failed(T),
}

impl<T> Loadable<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Loading => None,
            Loadable::Loaded(value) | Loadable::Failed(value) => Some(value),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Loadable::Failed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Loadable::Loading => Loadable::Loading,
            Loadable::Loaded(value) => Loadable::Loaded(f(value)),
            Loadable::Failed(value) => Loadable::Failed(f(value)),
        }
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

/// Awaits a single read and falls back to `placeholder` on any failure. No retry.
pub async fn load_by_id<T, Fut>(
    resource: &str,
    id: i64,
    fetch: Fut,
    placeholder: impl FnOnce(i64) -> T,
) -> Loadable<T>
where
    Fut: Future<Output = Result<T, ApiError>>,
{
    match fetch.await {
        Ok(value) => Loadable::Loaded(value),
        Err(e) => {
            error!("Error fetching {resource} {id}: {e}");
            Loadable::Failed(placeholder(id))
        }
    }
}

pub async fn load_flat(api: &dyn FlatsApi, id: i64) -> Loadable<Flat> {
    load_by_id("flat", id, api.get_flat(id), Flat::unknown).await
}

pub async fn load_office(api: &dyn OfficesApi, id: i64) -> Loadable<Office> {
    load_by_id("office", id, api.get_office(id), Office::unknown).await
}

/// Name and lead image of a flat, as shown on booking forms and booking cards.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatSummary {
    pub name: String,
    pub image: Option<String>,
}

impl FlatSummary {
    pub fn unknown() -> FlatSummary {
        FlatSummary {
            name: String::from(UNKNOWN_FLAT_NAME),
            image: None,
        }
    }

    pub fn from_flat(flat: &Flat, base_url: &str) -> FlatSummary {
        FlatSummary {
            name: flat.name.clone(),
            image: flat
                .first_image()
                .map(|image| resolve_image_url(base_url, image)),
        }
    }
}

pub async fn load_flat_summary(api: &dyn FlatsApi, id: i64) -> Loadable<FlatSummary> {
    match load_flat(api, id).await {
        Loadable::Loaded(flat) => Loadable::Loaded(FlatSummary::from_flat(&flat, api.base_url())),
        Loadable::Failed(_) => Loadable::Failed(FlatSummary::unknown()),
        Loadable::Loading => Loadable::Loading,
    }
}
