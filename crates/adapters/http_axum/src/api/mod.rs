//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod bands;
#[allow(clippy::missing_errors_doc)]
pub mod reports;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;

use bandservice_app::ports::{BandRepository, UserDirectory};

use crate::state::AppState;

/// Build the `/bands` route table.
///
/// Static segments (`all`, `report`, `bb`) win over the `{id}` capture, so
/// `/bands/all` never reaches the by-id handler.
pub fn routes<BR, UD>() -> Router<AppState<BR, UD>>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/bands",
            get(bands::get_by_name::<BR, UD>).post(bands::create::<BR, UD>),
        )
        .route("/bands/all", get(bands::list::<BR, UD>))
        .route("/bands/report", get(reports::global::<BR, UD>))
        .route("/bands/bb/{id}", get(users::relay::<BR, UD>))
        .route(
            "/bands/{id}",
            get(bands::get::<BR, UD>)
                .delete(bands::delete::<BR, UD>)
                .patch(bands::update::<BR, UD>),
        )
        .route("/bands/{id}/report", get(reports::single::<BR, UD>))
        .route(
            "/bands/{id}/tasks/{task_id}/check",
            get(reports::ready_check::<BR, UD>),
        )
}
