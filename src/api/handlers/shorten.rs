//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "expires_at": "2027-01-01T00:00:00Z"  // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "0001",
///   "short_url": "https://s.example.com/0001",
///   "original_url": "https://example.com/some/long/path"
/// }
/// ```
///
/// Shortening the same URL again returns the existing code; the expiry on
/// the duplicate request is ignored.
///
/// # Errors
///
/// Returns 400 Bad Request for an empty URL, 500 on an allocation conflict,
/// 503 when storage is unavailable.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state
        .shorten_service
        .shorten(&payload.url, payload.expires_at)
        .await?;

    let short_url = state.shorten_service.short_url(&record.code);

    Ok(Json(ShortenResponse {
        code: record.code,
        short_url,
        original_url: record.original_url,
    }))
}
