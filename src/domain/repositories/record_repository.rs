//! Repository trait for short record data access.

use crate::domain::entities::{NewShortRecord, ShortRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short-record store.
///
/// Codes are unique at the storage layer; original URLs are not. Duplicate
/// URLs with different codes are possible when two shortenings of a new URL
/// race past the de-duplication check - an accepted property, not a bug.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortRecordRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryShortRecordRepository`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortRecordRepository: Send + Sync {
    /// Inserts a new record with a zero hit count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Storage`] on storage errors.
    async fn insert(&self, record: NewShortRecord) -> Result<ShortRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortRecord>, AppError>;

    /// Finds the first record for an original URL (exact, case-sensitive
    /// match). Used for de-duplication.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<ShortRecord>, AppError>;

    /// Increments the hit count for a code. Best-effort: callers issuing
    /// this as a fire-and-forget side effect must swallow the error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage errors.
    async fn increment_hits(&self, code: &str) -> Result<(), AppError>;

    /// Returns true when the underlying store is reachable.
    async fn health_check(&self) -> bool;
}
