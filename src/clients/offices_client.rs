use async_trait::async_trait;
use log::debug;

use crate::clients::helpers::{build_http_client, join_url, read_json, success_body};
use crate::config::Config;
use crate::errors::ApiError;
use crate::models::office::Office;
use crate::models::reservation::Reservation;

/// Operations offered by the offices/reservations backend.
#[async_trait]
pub trait OfficesApi: Send + Sync {
    async fn list_offices(&self) -> Result<Vec<Office>, ApiError>;

    async fn get_office(&self, id: i64) -> Result<Office, ApiError>;

    /// Returns the created reservation when the backend echoes one back.
    async fn create_reservation(
        &self,
        office_id: i64,
        reservation: &Reservation,
    ) -> Result<Option<Reservation>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct OfficesClient {
    base_url: String,
    http: reqwest::Client,
}

impl OfficesClient {
    pub fn new(base_url: &str, timeout_seconds: Option<u64>) -> Result<OfficesClient, ApiError> {
        Ok(OfficesClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: build_http_client(timeout_seconds)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<OfficesClient, ApiError> {
        OfficesClient::new(&config.offices_api_url, config.request_timeout_seconds)
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

#[async_trait]
impl OfficesApi for OfficesClient {
    async fn list_offices(&self) -> Result<Vec<Office>, ApiError> {
        debug!("GET /offices");
        let response = self.http.get(self.url("/offices")).send().await?;
        read_json(response).await
    }

    async fn get_office(&self, id: i64) -> Result<Office, ApiError> {
        debug!("GET /offices/{id}");
        let response = self
            .http
            .get(self.url(&format!("/offices/{id}")))
            .send()
            .await?;
        read_json(response).await
    }

    async fn create_reservation(
        &self,
        office_id: i64,
        reservation: &Reservation,
    ) -> Result<Option<Reservation>, ApiError> {
        debug!("POST /reservations/office/{office_id}");
        let response = self
            .http
            .post(self.url(&format!("/reservations/office/{office_id}")))
            .json(reservation)
            .send()
            .await?;

        let body = success_body(response).await?;
        // Some deployments answer with a bare acknowledgement instead of the record.
        Ok(serde_json::from_str(&body).ok())
    }
}
