//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::ShortenedUrl;

/// Request to shorten a URL.
///
/// `url` is kept untyped so that a missing or non-string value is reported as
/// an invalid URL by the service rather than as a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
}

impl From<ShortenedUrl> for ShortenResponse {
    fn from(shortened: ShortenedUrl) -> Self {
        Self {
            code: shortened.code,
            short_url: shortened.short_url,
            long_url: shortened.long_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_url_defaults_to_null() {
        let request: ShortenRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.url.is_null());
    }

    #[test]
    fn test_request_keeps_non_string_url() {
        let request: ShortenRequest = serde_json::from_value(json!({ "url": 5 })).unwrap();
        assert_eq!(request.url, json!(5));
    }

    #[test]
    fn test_response_uses_camel_case() {
        let response = ShortenResponse::from(ShortenedUrl {
            code: "AbC123".to_string(),
            long_url: "https://a.com/".to_string(),
            short_url: "http://short.ly/AbC123".to_string(),
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "code": "AbC123",
                "shortUrl": "http://short.ly/AbC123",
                "longUrl": "https://a.com/"
            })
        );
    }
}
