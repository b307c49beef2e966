//! URL shortening service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::domain::entities::{NewShortRecord, ShortRecord};
use crate::domain::repositories::{CounterRepository, ShortRecordRepository};
use crate::error::AppError;
use crate::utils::encoding::Alphabet;

/// Settings supplied by the configuration collaborator at construction.
#[derive(Debug, Clone)]
pub struct ShortenSettings {
    /// Ordered distinct symbol set for positional encoding.
    pub alphabet: Alphabet,
    /// Codes shorter than this are left-padded with the zero symbol.
    pub min_code_length: usize,
    /// Prefix for composed short URLs, e.g. `https://s.example.com`.
    pub base_url: String,
    /// Applied when the caller omits an explicit expiry. `None` means
    /// records without an explicit expiry never expire.
    pub default_expiry: Option<Duration>,
}

/// Service for producing short codes from long URLs.
///
/// Orchestrates the counter allocator, the encoder, and the short-record
/// store: de-duplication first, then a single atomic allocation, positional
/// encoding, minimum-length padding, and persistence.
///
/// # De-duplication
///
/// Identical long URLs collapse to one code for the lifetime of that record;
/// a differing expiry on the duplicate call is ignored. The check-then-insert
/// window is not protected by a cross-step lock, so two concurrent
/// shortenings of the same new URL can both allocate - a documented
/// best-effort policy, not a uniqueness guarantee.
pub struct ShortenService {
    records: Arc<dyn ShortRecordRepository>,
    counter: Arc<dyn CounterRepository>,
    settings: ShortenSettings,
}

impl ShortenService {
    /// Creates a new shortening service.
    pub fn new(
        records: Arc<dyn ShortRecordRepository>,
        counter: Arc<dyn CounterRepository>,
        settings: ShortenSettings,
    ) -> Self {
        Self {
            records,
            counter,
            settings,
        }
    }

    /// Shortens a URL, reusing an existing record when the URL was already
    /// shortened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty URL,
    /// [`AppError::Conflict`] when the allocator produces a code that
    /// collides with an existing record (an invariant violation, fatal for
    /// the request and never retried), and [`AppError::Storage`] on storage
    /// failures.
    pub async fn shorten(
        &self,
        url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortRecord, AppError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::bad_request(
                "Please specify a URL to be shortened",
                json!({}),
            ));
        }

        if let Some(existing) = self.records.find_by_url(url).await? {
            return Ok(existing);
        }

        let allocation = self.counter.allocate_next().await?;
        let code = self.pad(self.settings.alphabet.encode(allocation));

        let record = NewShortRecord {
            code: code.clone(),
            original_url: url.to_string(),
            expires_at: expires_at.or_else(|| self.settings.default_expiry.map(|d| Utc::now() + d)),
        };

        match self.records.insert(record).await {
            Ok(stored) => Ok(stored),
            Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                "Allocation conflict: freshly allocated code already exists",
                json!({ "code": code, "allocation": allocation }),
            )),
            Err(e) => Err(e),
        }
    }

    /// Composes the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }

    /// Left-pads a code with the zero symbol up to the minimum length.
    fn pad(&self, code: String) -> String {
        let missing = self.settings.min_code_length.saturating_sub(code.chars().count());
        if missing == 0 {
            return code;
        }

        let mut padded = self
            .settings
            .alphabet
            .zero_symbol()
            .to_string()
            .repeat(missing);
        padded.push_str(&code);
        padded
    }
}
