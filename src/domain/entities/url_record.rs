//! Url record entity representing a persisted short code mapping.

use chrono::{DateTime, Utc};

/// A mapping between a short code and the long URL it stands for.
///
/// `long_url_hash` is the deduplication key: identical long URLs hash
/// identically, so repeat shortening requests find the existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub short_code: String,
    pub long_url: String,
    pub long_url_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a record stamped with the current time for both
    /// `created_at` and `last_used_at`.
    pub fn new(short_code: String, long_url: String, long_url_hash: String) -> Self {
        let now = Utc::now();
        Self {
            short_code,
            long_url,
            long_url_hash,
            created_at: now,
            last_used_at: now,
        }
    }

    /// Returns a copy of this record with a different short code.
    pub fn with_short_code(self, short_code: String) -> Self {
        Self { short_code, ..self }
    }
}
