//! PostgreSQL implementation of the short-record store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortRecord, ShortRecord};
use crate::domain::repositories::ShortRecordRepository;
use crate::error::AppError;

/// PostgreSQL repository for short record storage and retrieval.
///
/// Uses the runtime query API with bound parameters; code uniqueness is
/// enforced by the primary key, so a racing duplicate insert surfaces as a
/// unique violation rather than a second row.
pub struct PgShortRecordRepository {
    pool: Arc<PgPool>,
}

impl PgShortRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShortRecordRow {
    code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    hit_count: i64,
}

impl From<ShortRecordRow> for ShortRecord {
    fn from(row: ShortRecordRow) -> Self {
        ShortRecord::new(
            row.code,
            row.original_url,
            row.created_at,
            row.expires_at,
            row.hit_count,
        )
    }
}

#[async_trait]
impl ShortRecordRepository for PgShortRecordRepository {
    async fn insert(&self, record: NewShortRecord) -> Result<ShortRecord, AppError> {
        let row = sqlx::query_as::<_, ShortRecordRow>(
            r#"
            INSERT INTO short_records (code, original_url, expires_at)
            VALUES ($1, $2, $3)
            RETURNING code, original_url, created_at, expires_at, hit_count
            "#,
        )
        .bind(&record.code)
        .bind(&record.original_url)
        .bind(record.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortRecord>, AppError> {
        let row = sqlx::query_as::<_, ShortRecordRow>(
            r#"
            SELECT code, original_url, created_at, expires_at, hit_count
            FROM short_records
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<ShortRecord>, AppError> {
        // URL uniqueness is not enforced; the oldest record wins.
        let row = sqlx::query_as::<_, ShortRecordRow>(
            r#"
            SELECT code, original_url, created_at, expires_at, hit_count
            FROM short_records
            WHERE original_url = $1
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_hits(&self, code: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE short_records SET hit_count = hit_count + 1 WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
