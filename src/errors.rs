use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logger error: {0}")]
    Logger(#[from] fern::InitError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Failures of a single request/response cycle against one of the backends.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Message shown inline on a screen. Server rejections keep their body text,
    /// everything else collapses into the generic message.
    pub fn user_message(&self, prefix: &str, generic: &str) -> String {
        match self {
            ApiError::Status { body, .. } => format!("{prefix}: {body}"),
            _ => generic.to_string(),
        }
    }
}

/// Client-side form failures. Submission is never attempted when one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email.")]
    InvalidEmail,

    #[error("Start Date and End Date cannot be empty.")]
    MissingDates,

    #[error("Flat ID is missing.")]
    MissingFlatId,

    #[error("Office ID is missing.")]
    MissingOfficeId,

    #[error("Booking ID is missing.")]
    MissingBookingId,

    #[error("{0} must be a number.")]
    InvalidNumber(&'static str),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
