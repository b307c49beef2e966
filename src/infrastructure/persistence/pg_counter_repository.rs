//! PostgreSQL implementation of the allocation counter.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// Fixed key of the singleton counter row.
const COUNTER_ID: i16 = 0;

/// PostgreSQL repository for the singleton allocation counter.
///
/// Increment-and-fetch runs as a single `UPDATE ... RETURNING` statement, so
/// concurrent callers are serialized by the row lock and each observes a
/// distinct value. The service layer never reads the counter and writes it
/// back in separate steps.
pub struct PgCounterRepository {
    pool: Arc<PgPool>,
}

impl PgCounterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterRepository for PgCounterRepository {
    async fn ensure_initialized(&self, initial: u64) -> Result<(), AppError> {
        let initial = i64::try_from(initial).map_err(|_| {
            AppError::storage(
                "Counter initial value out of range",
                json!({ "initial": initial }),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO counters (id, last_index)
            VALUES ($1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(COUNTER_ID)
        .bind(initial)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn allocate_next(&self) -> Result<u64, AppError> {
        let next: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE counters
            SET last_index = last_index + 1
            WHERE id = $1
            RETURNING last_index
            "#,
        )
        .bind(COUNTER_ID)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let next = next.ok_or_else(|| {
            AppError::storage("Counter row is missing; bootstrap did not run", json!({}))
        })?;

        u64::try_from(next)
            .map_err(|_| AppError::storage("Counter value out of range", json!({ "value": next })))
    }
}
