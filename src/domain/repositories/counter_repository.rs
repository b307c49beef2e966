//! Repository trait for the allocation counter.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the monotonic allocation counter.
///
/// The counter is the only component with a strict atomicity requirement:
/// under N concurrent callers starting from initial value `v`, the multiset
/// of values returned by [`allocate_next`](Self::allocate_next) must be
/// exactly `{v+1, ..., v+N}` - no gaps, no repeats, regardless of
/// interleaving. Implementations must perform increment-and-fetch as a
/// single indivisible storage operation, never a separate read and write.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCounterRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryCounterRepository`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Creates the counter row with the given initial value if absent.
    ///
    /// Idempotent upsert: concurrent bootstrap attempts must not create
    /// duplicate counter rows or reset an existing value. Called once at
    /// service startup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage errors.
    async fn ensure_initialized(&self, initial: u64) -> Result<(), AppError>;

    /// Atomically increments the counter and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store is unreachable or the
    /// counter row is missing. No retry is performed internally.
    async fn allocate_next(&self) -> Result<u64, AppError>;
}
