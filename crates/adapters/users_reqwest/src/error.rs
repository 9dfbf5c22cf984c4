//! User-service adapter errors.

use bandservice_domain::error::BandError;

/// Errors originating from the outbound user-service client.
#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    /// The configured base URL does not parse.
    #[error("invalid user service base URL")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The configured base URL cannot carry path segments (e.g. `mailto:`).
    #[error("user service base URL cannot be a base: {0}")]
    CannotBeABase(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request failed in transit (connect, timeout, body read).
    #[error("user service request failed")]
    Request(#[source] reqwest::Error),
}

impl From<UserServiceError> for BandError {
    fn from(err: UserServiceError) -> Self {
        Self::Upstream(Box::new(err))
    }
}
