//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (lookup + expiry check)
/// 2. Hit increment is issued by the service as a detached task; the
///    response never waits for it
/// 3. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist and 409 Conflict if the
/// record has expired. Expired records are kept; repeated requests keep
/// returning 409.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.resolve_service.resolve(&code).await?;

    Ok(Redirect::temporary(&record.original_url))
}
