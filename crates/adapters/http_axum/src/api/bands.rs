//! JSON REST handlers for bands.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use bandservice_app::ports::{BandRepository, UserDirectory};
use bandservice_domain::band::{Band, BandPatch, NewBand};
use bandservice_domain::id::BandId;
use bandservice_domain::task::Task;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a band. Any `id` sent by the client is ignored.
#[derive(Deserialize)]
pub struct CreateBandRequest {
    pub name: String,
    pub genre: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Query string of the by-name lookup.
#[derive(Deserialize)]
pub struct ByNameQuery {
    #[serde(rename = "bandName")]
    pub band_name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Band>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get-by-id endpoint.
pub enum GetResponse {
    Ok(Json<Band>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get-by-name endpoint.
pub enum ByNameResponse {
    /// The band, or JSON `null` when no band has that name.
    Ok(Json<Option<Band>>),
}

impl IntoResponse for ByNameResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<Band>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => (StatusCode::OK, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Band>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    /// Empty body, whether or not the band existed.
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// `POST /bands`
pub async fn create<BR, UD>(
    State(state): State<AppState<BR, UD>>,
    payload: Result<Json<CreateBandRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    tracing::info!("creating new band");

    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected band payload");
        ApiError::INVALID_BAND
    })?;

    let mut builder = NewBand::builder()
        .name(req.name)
        .members(req.members)
        .tasks(req.tasks);
    if let Some(genre) = req.genre {
        builder = builder.genre(genre);
    }
    let band = builder.build().map_err(|err| {
        tracing::debug!(error = %err, "band failed validation");
        ApiError::INVALID_BAND
    })?;

    let created = state.band_service.create(band).await?;
    Ok(CreateResponse::Ok(Json(created)))
}

/// `GET /bands?bandName=NAME`
///
/// Unlike the by-id lookup, an unknown name is not an error: the body is `null`.
pub async fn get_by_name<BR, UD>(
    State(state): State<AppState<BR, UD>>,
    Query(query): Query<ByNameQuery>,
) -> Result<ByNameResponse, ApiError>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    tracing::info!(band_name = %query.band_name, "getting band by name");
    let band = state.band_service.read_by_name(&query.band_name).await?;
    Ok(ByNameResponse::Ok(Json(band)))
}

/// `GET /bands/{id}`
pub async fn get<BR, UD>(
    State(state): State<AppState<BR, UD>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    tracing::info!(band_id = id, "getting band by id");
    let band = state
        .band_service
        .read_by_id(BandId::new(id))
        .await?
        .ok_or(ApiError::BAND_NOT_FOUND)?;
    Ok(GetResponse::Ok(Json(band)))
}

/// `GET /bands/all`
pub async fn list<BR, UD>(
    State(state): State<AppState<BR, UD>>,
) -> Result<ListResponse, ApiError>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    tracing::info!("getting all bands");
    let bands = state.band_service.get_all().await?;
    Ok(ListResponse::Ok(Json(bands)))
}

/// `DELETE /bands/{id}`
pub async fn delete<BR, UD>(
    State(state): State<AppState<BR, UD>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    tracing::info!(band_id = id, "deleting band");
    state.band_service.delete(BandId::new(id)).await?;
    Ok(DeleteResponse::Ok)
}

/// `PATCH /bands/{id}`
pub async fn update<BR, UD>(
    State(state): State<AppState<BR, UD>>,
    Path(id): Path<i64>,
    payload: Result<Json<BandPatch>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    tracing::info!(band_id = id, "updating band");

    let Json(patch) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected band patch");
        ApiError::INVALID_BAND
    })?;

    let band = state.band_service.update(BandId::new(id), patch).await?;
    Ok(UpdateResponse::Ok(Json(band)))
}
