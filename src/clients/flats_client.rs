use async_trait::async_trait;
use log::debug;

use crate::clients::helpers::{build_http_client, join_url, read_json, success_body};
use crate::config::Config;
use crate::errors::ApiError;
use crate::models::booking::Booking;
use crate::models::flat::{Flat, FlatFilter};

/// Operations offered by the flats/bookings backend.
#[async_trait]
pub trait FlatsApi: Send + Sync {
    async fn list_flats(&self) -> Result<Vec<Flat>, ApiError>;

    async fn filter_flats(&self, filter: &FlatFilter) -> Result<Vec<Flat>, ApiError>;

    async fn get_flat(&self, id: i64) -> Result<Flat, ApiError>;

    async fn get_booking(&self, id: i64) -> Result<Booking, ApiError>;

    async fn active_bookings(&self, user_email: &str) -> Result<Vec<Booking>, ApiError>;

    async fn create_booking(&self, booking: &Booking) -> Result<Booking, ApiError>;

    /// The backend answers with an empty body; a returned booking is passed through.
    async fn cancel_booking(&self, id: i64) -> Result<Option<Booking>, ApiError>;

    /// Base URL that relative image paths are resolved against.
    fn base_url(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct FlatsClient {
    base_url: String,
    http: reqwest::Client,
}

impl FlatsClient {
    pub fn new(base_url: &str, timeout_seconds: Option<u64>) -> Result<FlatsClient, ApiError> {
        Ok(FlatsClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: build_http_client(timeout_seconds)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<FlatsClient, ApiError> {
        FlatsClient::new(&config.flats_api_url, config.request_timeout_seconds)
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub fn filter_request(&self, filter: &FlatFilter) -> Result<reqwest::Request, ApiError> {
        let params = filter.query_pairs();
        let request = self
            .http
            .get(self.url("/api/flats/filter"))
            .query(&params)
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl FlatsApi for FlatsClient {
    async fn list_flats(&self) -> Result<Vec<Flat>, ApiError> {
        debug!("GET /api/flats");
        let response = self.http.get(self.url("/api/flats")).send().await?;
        read_json(response).await
    }

    async fn filter_flats(&self, filter: &FlatFilter) -> Result<Vec<Flat>, ApiError> {
        let request = self.filter_request(filter)?;
        debug!("GET {}", request.url());
        let response = self.http.execute(request).await?;
        read_json(response).await
    }

    async fn get_flat(&self, id: i64) -> Result<Flat, ApiError> {
        debug!("GET /api/flats/{id}");
        let response = self
            .http
            .get(self.url(&format!("/api/flats/{id}")))
            .send()
            .await?;
        read_json(response).await
    }

    async fn get_booking(&self, id: i64) -> Result<Booking, ApiError> {
        debug!("GET /api/bookings/{id}");
        let response = self
            .http
            .get(self.url(&format!("/api/bookings/{id}")))
            .send()
            .await?;
        read_json(response).await
    }

    async fn active_bookings(&self, user_email: &str) -> Result<Vec<Booking>, ApiError> {
        debug!("GET /api/bookings/active");
        let params: Vec<(&str, &str)> = vec![("userEmail", user_email)];
        let response = self
            .http
            .get(self.url("/api/bookings/active"))
            .query(&params)
            .send()
            .await?;
        read_json(response).await
    }

    async fn create_booking(&self, booking: &Booking) -> Result<Booking, ApiError> {
        debug!("POST /api/bookings for flat {}", booking.flat_id);
        let response = self
            .http
            .post(self.url("/api/bookings"))
            .json(booking)
            .send()
            .await?;
        read_json(response).await
    }

    async fn cancel_booking(&self, id: i64) -> Result<Option<Booking>, ApiError> {
        debug!("POST /api/bookings/{id}/cancel");
        let response = self
            .http
            .post(self.url(&format!("/api/bookings/{id}/cancel")))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let body = success_body(response).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
