//! In-memory repository implementations.
//!
//! Process-local stores used by the test suite and by `STORAGE=memory`
//! deployments (demos, single-process setups where persistence across
//! restarts is not needed). They honor the same contracts as the Postgres
//! implementations, including counter atomicity.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;

use crate::domain::entities::{NewShortRecord, ShortRecord};
use crate::domain::repositories::{CounterRepository, ShortRecordRepository};
use crate::error::AppError;

/// In-memory short-record store backed by an insertion-ordered list.
///
/// Insertion order doubles as creation order, so `find_by_url` returns the
/// oldest record for a URL, matching the Postgres implementation.
#[derive(Default)]
pub struct MemoryShortRecordRepository {
    records: Mutex<Vec<ShortRecord>>,
}

impl MemoryShortRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortRecordRepository for MemoryShortRecordRepository {
    async fn insert(&self, record: NewShortRecord) -> Result<ShortRecord, AppError> {
        let mut records = self.records.lock().await;

        if records.iter().any(|r| r.code == record.code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "code": record.code }),
            ));
        }

        let stored = ShortRecord::new(
            record.code,
            record.original_url,
            Utc::now(),
            record.expires_at,
            0,
        );
        records.push(stored.clone());

        Ok(stored)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortRecord>, AppError> {
        let records = self.records.lock().await;
        Ok(records.iter().find(|r| r.code == code).cloned())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<ShortRecord>, AppError> {
        let records = self.records.lock().await;
        Ok(records.iter().find(|r| r.original_url == url).cloned())
    }

    async fn increment_hits(&self, code: &str) -> Result<(), AppError> {
        let mut records = self.records.lock().await;
        if let Some(record) = records.iter_mut().find(|r| r.code == code) {
            record.hit_count += 1;
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// In-memory allocation counter backed by an atomic integer.
///
/// `fetch_add` gives the same no-gaps, no-repeats guarantee the Postgres
/// `UPDATE ... RETURNING` statement provides.
#[derive(Default)]
pub struct MemoryCounterRepository {
    value: AtomicU64,
    initialized: AtomicBool,
}

impl MemoryCounterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterRepository for MemoryCounterRepository {
    async fn ensure_initialized(&self, initial: u64) -> Result<(), AppError> {
        // Only the first bootstrap attempt seeds the value.
        if !self.initialized.swap(true, Ordering::SeqCst) {
            self.value.store(initial, Ordering::SeqCst);
        }
        Ok(())
    }

    async fn allocate_next(&self) -> Result<u64, AppError> {
        Ok(self.value.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
