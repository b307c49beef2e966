//! DTOs for the shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. Only non-emptiness is validated; anything the
    /// caller can dereference is accepted.
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    /// Optional expiry timestamp. After this time, resolution returns 409.
    /// Omitted means the configured default expiry, or never.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response containing the composed short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
}
