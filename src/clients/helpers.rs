use std::time::Duration;

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300";

pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Flat images are either absolute URLs or paths relative to the flats backend.
pub fn resolve_image_url(base_url: &str, image: &str) -> String {
    if image.starts_with("http") {
        image.to_string()
    } else {
        join_url(base_url, image)
    }
}

pub fn build_http_client(timeout_seconds: Option<u64>) -> Result<reqwest::Client, ApiError> {
    let mut builder = reqwest::Client::builder();
    if let Some(seconds) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    Ok(builder.build()?)
}

/// Reads the body as text, turning any non-success status into `ApiError::Status`
/// carrying that text.
pub async fn success_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::Status { status, body });
    }

    Ok(body)
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = success_body(response).await?;
    Ok(serde_json::from_str(&body)?)
}
