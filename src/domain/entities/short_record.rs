//! Short record entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link with usage metadata.
///
/// `code` is the primary key and immutable once created. `expires_at` is
/// always an explicit nullable timestamp: `None` means the record never
/// expires. Expiry is evaluated at resolution time; expired records are not
/// purged.
#[derive(Debug, Clone)]
pub struct ShortRecord {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub hit_count: i64,
}

impl ShortRecord {
    /// Creates a new ShortRecord instance.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        hit_count: i64,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expires_at,
            hit_count,
        }
    }

    /// Returns true if the record has passed its expiry time.
    ///
    /// A record expires strictly after `expires_at`; a `None` expiry never
    /// expires.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| e < Utc::now())
    }
}

/// Input data for creating a new short record.
#[derive(Debug, Clone)]
pub struct NewShortRecord {
    pub code: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_record_creation() {
        let now = Utc::now();
        let record = ShortRecord::new(
            "0001".to_string(),
            "https://example.com".to_string(),
            now,
            None,
            0,
        );

        assert_eq!(record.code, "0001");
        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.created_at, now);
        assert_eq!(record.hit_count, 0);
        assert!(!record.is_expired());
    }

    #[test]
    fn test_record_expired_in_past() {
        let record = ShortRecord::new(
            "0001".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            Some(Utc::now() - Duration::seconds(1)),
            0,
        );
        assert!(record.is_expired());
    }

    #[test]
    fn test_record_not_expired_in_future() {
        let record = ShortRecord::new(
            "0001".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            Some(Utc::now() + Duration::hours(1)),
            0,
        );
        assert!(!record.is_expired());
    }

    #[test]
    fn test_null_expiry_never_expires() {
        let record = ShortRecord::new(
            "0001".to_string(),
            "https://example.com".to_string(),
            Utc::now() - Duration::days(3650),
            None,
            42,
        );
        assert!(!record.is_expired());
    }
}
