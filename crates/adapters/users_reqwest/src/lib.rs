//! # bandservice-adapter-users-reqwest
//!
//! Outbound adapter for the external user service, built on
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `UserDirectory` port defined in `bandservice-app::ports`
//! - Resolve user URLs against a configured base URL (`{base}/api/users/{id}`)
//! - Bound every call with the configured timeout
//! - Report transport failures as typed errors; upstream status codes are
//!   returned untouched
//!
//! ## Dependency rule
//! Depends on `bandservice-app` (for the port trait) and `bandservice-domain`
//! (for error types). Never leaks reqwest types through the port.

mod error;

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use bandservice_app::ports::{UserDirectory, UserResponse};
use bandservice_domain::error::BandError;

pub use error::UserServiceError;

/// Configuration for the user-service adapter.
pub struct Config {
    /// Base URL of the user service, e.g. `https://users.example.com`.
    pub base_url: String,
    /// Upper bound for a whole request, connect to last body byte.
    pub timeout: Duration,
}

impl Config {
    /// Build a [`ReqwestUserDirectory`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError`] if the base URL is invalid or the HTTP
    /// client cannot be created.
    pub fn build(self) -> Result<ReqwestUserDirectory, UserServiceError> {
        let base_url = Url::parse(&self.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(UserServiceError::CannotBeABase(self.base_url));
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(UserServiceError::Client)?;

        Ok(ReqwestUserDirectory { client, base_url })
    }
}

/// `UserDirectory` backed by a pooled reqwest client.
pub struct ReqwestUserDirectory {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestUserDirectory {
    /// Resolve the URL of user `id`. The id always stays one path segment.
    fn user_url(&self, id: &str) -> Result<Url, UserServiceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| UserServiceError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "users", id]);
        Ok(url)
    }
}

impl UserDirectory for ReqwestUserDirectory {
    async fn fetch_user(&self, id: &str) -> Result<UserResponse, BandError> {
        let url = self.user_url(id)?;
        tracing::debug!(%url, "fetching user");

        let response = self.client.get(url).send().await.map_err(|err| {
            tracing::warn!(error = %err, "user service request failed");
            UserServiceError::Request(err)
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = response.bytes().await.map_err(UserServiceError::Request)?;

        Ok(UserResponse {
            status,
            content_type,
            body,
        })
    }
}
