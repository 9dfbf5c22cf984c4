//! Pass-through to the external user service.

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use bandservice_app::ports::{BandRepository, UserDirectory, UserResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the relay endpoint.
pub enum RelayResponse {
    /// Whatever the user service answered, status and body untouched.
    Relayed(UserResponse),
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Relayed(upstream) => {
                let status =
                    StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
                let mut response = (status, upstream.body).into_response();
                match upstream
                    .content_type
                    .and_then(|ct| HeaderValue::from_str(&ct).ok())
                {
                    Some(value) => {
                        response.headers_mut().insert(CONTENT_TYPE, value);
                    }
                    None => {
                        response.headers_mut().remove(CONTENT_TYPE);
                    }
                }
                response
            }
        }
    }
}

/// `GET /bands/bb/{id}`
pub async fn relay<BR, UD>(
    State(state): State<AppState<BR, UD>>,
    Path(id): Path<String>,
) -> Result<RelayResponse, ApiError>
where
    BR: BandRepository + Send + Sync + 'static,
    UD: UserDirectory + Send + Sync + 'static,
{
    tracing::info!(user_id = %id, "relaying user lookup");
    let upstream = state.user_directory.fetch_user(&id).await?;
    Ok(RelayResponse::Relayed(upstream))
}
