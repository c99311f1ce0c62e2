//! DTO for the short URL metadata endpoint.

use serde::Serialize;

use crate::domain::entities::ShortUrlRecord;

/// Stored record as exposed over the API.
///
/// `createdAt` is milliseconds since the Unix epoch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse {
    pub code: String,
    pub long_url: String,
    pub created_at: i64,
    pub clicks: u64,
}

impl From<ShortUrlRecord> for MetaResponse {
    fn from(record: ShortUrlRecord) -> Self {
        Self {
            code: record.code,
            long_url: record.long_url,
            created_at: record.created_at.timestamp_millis(),
            clicks: record.clicks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_meta_response_shape() {
        let record = ShortUrlRecord {
            code: "abc123".to_string(),
            long_url: "https://example.com/".to_string(),
            created_at: Utc.timestamp_millis_opt(1_700_000_000_123).unwrap(),
            clicks: 4,
        };

        assert_eq!(
            serde_json::to_value(MetaResponse::from(record)).unwrap(),
            json!({
                "code": "abc123",
                "longUrl": "https://example.com/",
                "createdAt": 1_700_000_000_123_i64,
                "clicks": 4
            })
        );
    }
}
