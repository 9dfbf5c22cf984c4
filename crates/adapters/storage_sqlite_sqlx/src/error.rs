//! Failures of the band store, folded into [`BandError::Storage`].

use bandservice_domain::error::BandError;

/// Errors raised while reading or writing the `bands` table.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// sqlx could not connect, run a statement or decode a row.
    #[error("band store query failed")]
    Database(#[from] sqlx::Error),

    /// A `members` or `tasks` list could not be encoded for a write.
    /// Decoding on read reports through [`sqlx::Error::Decode`] instead.
    #[error("band list column could not be encoded as JSON")]
    Json(#[from] serde_json::Error),

    /// The embedded schema could not be applied at startup.
    #[error("band schema migration failed")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for BandError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
