//! Shared application state for axum handlers.

use std::sync::Arc;

use bandservice_app::ports::{BandRepository, UserDirectory};
use bandservice_app::services::band_service::BandService;

/// Application state shared across all axum handlers.
///
/// Generic over the band repository and the user directory to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying
/// types themselves do not need to be `Clone` — only the `Arc` wrappers
/// are cloned.
pub struct AppState<BR, UD> {
    /// Band use-cases.
    pub band_service: Arc<BandService<BR>>,
    /// External user service, used by the pass-through endpoint.
    pub user_directory: Arc<UD>,
}

impl<BR, UD> Clone for AppState<BR, UD> {
    fn clone(&self) -> Self {
        Self {
            band_service: Arc::clone(&self.band_service),
            user_directory: Arc::clone(&self.user_directory),
        }
    }
}

impl<BR, UD> AppState<BR, UD>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(band_service: BandService<BR>, user_directory: UD) -> Self {
        Self {
            band_service: Arc::new(band_service),
            user_directory: Arc::new(user_directory),
        }
    }
}
