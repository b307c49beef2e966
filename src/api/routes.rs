//! API route configuration.

use crate::api::handlers::{link_info_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// REST API routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short URL
/// - `GET  /links/{code}`  - Record details and hit count (no hit counted)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links/{code}", get(link_info_handler))
}
