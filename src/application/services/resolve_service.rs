//! Short code resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::ShortRecord;
use crate::domain::repositories::ShortRecordRepository;
use crate::error::AppError;

/// Service for resolving short codes back to their records.
///
/// Resolution gates on expiry and counts usage. The hit increment is issued
/// as a detached task: it never blocks or fails the response, and the
/// returned record carries the pre-increment count. Lost increments under
/// load are tolerated; the hit count is a best-effort metric.
pub struct ResolveService {
    records: Arc<dyn ShortRecordRepository>,
}

impl ResolveService {
    /// Creates a new resolution service.
    pub fn new(records: Arc<dyn ShortRecordRepository>) -> Self {
        Self { records }
    }

    /// Resolves a code to its record, counting the hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty code,
    /// [`AppError::NotFound`] when no record matches (a missing code is
    /// never reported as expired), and [`AppError::Expired`] when the
    /// record's expiry has passed. Expired records are neither counted nor
    /// deleted.
    pub async fn resolve(&self, code: &str) -> Result<ShortRecord, AppError> {
        let record = self.lookup(code).await?;

        if record.is_expired() {
            return Err(AppError::expired(
                "Short link has expired",
                json!({ "code": record.code, "expires_at": record.expires_at }),
            ));
        }

        let records = Arc::clone(&self.records);
        let code = record.code.clone();
        tokio::spawn(async move {
            if let Err(e) = records.increment_hits(&code).await {
                tracing::warn!("failed to record hit for {}: {}", code, e);
            }
        });

        Ok(record)
    }

    /// Fetches a record by code without expiry gating or hit counting.
    ///
    /// Used by the info endpoint; expired records are returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty code and
    /// [`AppError::NotFound`] when no record matches.
    pub async fn lookup(&self, code: &str) -> Result<ShortRecord, AppError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::bad_request(
                "Please specify a code to resolve",
                json!({}),
            ));
        }

        self.records
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("No record found", json!({ "code": code })))
    }
}
