//! Read-only report and readiness-check handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use bandservice_app::ports::{BandRepository, UserDirectory};
use bandservice_domain::id::{BandId, TaskId};
use bandservice_domain::report::Report;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the global report endpoint.
pub enum GlobalResponse {
    Ok(Json<Report>),
}

impl IntoResponse for GlobalResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the single band report endpoint.
pub enum SingleResponse {
    Ok(Json<Vec<String>>),
}

impl IntoResponse for SingleResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the readiness check endpoint.
pub enum CheckResponse {
    /// Plain-text outcome, e.g. `READY`.
    Ok(String),
}

impl IntoResponse for CheckResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(outcome) => outcome.into_response(),
        }
    }
}

/// `GET /bands/report`
pub async fn global<BR, UD>(
    State(state): State<AppState<BR, UD>>,
) -> Result<GlobalResponse, ApiError>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    tracing::info!("getting global report");
    let report = state.band_service.get_report().await?;
    Ok(GlobalResponse::Ok(Json(report)))
}

/// `GET /bands/{id}/report`
pub async fn single<BR, UD>(
    State(state): State<AppState<BR, UD>>,
    Path(id): Path<i64>,
) -> Result<SingleResponse, ApiError>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    tracing::info!(band_id = id, "getting band report");
    let entries = state
        .band_service
        .get_single_report(BandId::new(id))
        .await?;
    Ok(SingleResponse::Ok(Json(entries)))
}

/// `GET /bands/{id}/tasks/{task_id}/check`
pub async fn ready_check<BR, UD>(
    State(state): State<AppState<BR, UD>>,
    Path((id, task_id)): Path<(i64, i64)>,
) -> Result<CheckResponse, ApiError>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    tracing::info!(band_id = id, task_id, "checking task");
    let outcome = state
        .band_service
        .get_ready_check(BandId::new(id), TaskId::new(task_id))
        .await?;
    Ok(CheckResponse::Ok(outcome))
}
