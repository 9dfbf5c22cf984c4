//! User directory port — read access to the external user service.

use std::future::Future;

use bytes::Bytes;

use bandservice_domain::error::BandError;

/// Raw response from the user service, relayed to clients as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// HTTP status code returned by the user service.
    pub status: u16,
    /// `Content-Type` header, when the user service sent one.
    pub content_type: Option<String>,
    /// Body bytes exactly as received, whatever the charset.
    pub body: Bytes,
}

/// Looks users up in the external user service.
pub trait UserDirectory {
    /// Fetch the user identified by `id`.
    ///
    /// Any status code is a successful fetch; only transport failures
    /// (connect, timeout, body read) are errors.
    fn fetch_user(&self, id: &str) -> impl Future<Output = Result<UserResponse, BandError>> + Send;
}
