//! Short URL record: the persisted mapping from a short code to a long URL.

use chrono::{DateTime, Utc};

/// A stored short URL with its click counter.
///
/// `code` is the primary key and never changes once assigned. `long_url`
/// always holds the normalized form produced by the URL validator. The only
/// mutation a record ever sees is the `clicks` increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlRecord {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl ShortUrlRecord {
    /// Creates a fresh record with zero clicks, stamped with the current time.
    pub fn new(code: String, long_url: String) -> Self {
        Self {
            code,
            long_url,
            created_at: Utc::now(),
            clicks: 0,
        }
    }
}

/// Result of a shorten operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
}
