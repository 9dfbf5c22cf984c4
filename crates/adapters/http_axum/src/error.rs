//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bandservice_domain::error::{BandError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors produced by the band handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Invalid payload, duplicate name, or unknown id on lookup.
    BandReference(&'static str),
    /// An error raised by the band service or one of its ports.
    Service(BandError),
}

impl ApiError {
    /// The create payload failed structural or domain validation.
    pub const INVALID_BAND: Self = Self::BandReference("Band is not valid");
    /// A band with the requested name already exists.
    pub const DUPLICATE_BAND: Self = Self::BandReference("The band is in DB");
    /// No band exists for the requested id.
    pub const BAND_NOT_FOUND: Self = Self::BandReference("Not found");
}

impl From<BandError> for ApiError {
    fn from(err: BandError) -> Self {
        match err {
            // Raised by the service check or by the storage `UNIQUE` index.
            BandError::Validation(ValidationError::DuplicateName(_)) => Self::DUPLICATE_BAND,
            other => Self::Service(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BandReference(message) => (StatusCode::BAD_REQUEST, (*message).to_string()),
            Self::Service(BandError::Validation(err)) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Service(BandError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Service(BandError::Upstream(err)) => {
                tracing::warn!(error = %err, "user service unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    "user service unavailable".to_string(),
                )
            }
            Self::Service(BandError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
