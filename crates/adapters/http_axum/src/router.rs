//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use bandservice_app::ports::{BandRepository, UserDirectory};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the band routes with a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<BR, UD>(state: AppState<BR, UD>) -> Router
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
