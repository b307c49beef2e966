//! DTOs for the link info endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortRecord;

/// Record details exposed by `GET /api/links/{code}`.
#[derive(Debug, Serialize)]
pub struct LinkInfoResponse {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub hit_count: i64,
    pub expired: bool,
}

impl From<ShortRecord> for LinkInfoResponse {
    fn from(record: ShortRecord) -> Self {
        let expired = record.is_expired();
        Self {
            code: record.code,
            original_url: record.original_url,
            created_at: record.created_at,
            expires_at: record.expires_at,
            hit_count: record.hit_count,
            expired,
        }
    }
}
