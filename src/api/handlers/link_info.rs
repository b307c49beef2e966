//! Handler for the link info endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link_info::LinkInfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a code, including its hit count.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// Unlike the redirect path this is a pure lookup: no hit is counted and
/// expired records are returned with `"expired": true` instead of an error.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn link_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    let record = state.resolve_service.lookup(&code).await?;

    Ok(Json(record.into()))
}
