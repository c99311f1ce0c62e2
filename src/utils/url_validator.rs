//! Long URL validation and normalization.
//!
//! The canonical form returned here is the exact string that is deduplicated
//! and stored, so two spellings of the same URL map to one short code.

use crate::error::AppError;
use serde_json::Value;
use url::Url;

/// Validates an untyped request value as a long URL.
///
/// Anything other than a JSON string is rejected as missing.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] if the value is not a string or fails
/// [`validate_url_str`].
pub fn validate_url(input: &Value) -> Result<String, AppError> {
    match input.as_str() {
        Some(raw) => validate_url_str(raw),
        None => Err(AppError::invalid_url("url is missing")),
    }
}

/// Validates a candidate long URL and returns its canonical form.
///
/// # Normalization Rules
///
/// Whatever [`Url`] serialization produces for the trimmed input:
/// lowercase scheme and host, default ports dropped, an empty path becomes
/// `/`, percent-encoding applied where required.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] if:
/// - input is empty or whitespace only
/// - input is not an absolute URL
/// - scheme is not `http` or `https`
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url_str("https://a.com").unwrap(), "https://a.com/");
/// assert_eq!(
///     validate_url_str("HTTPS://EXAMPLE.COM:443/Path").unwrap(),
///     "https://example.com/Path"
/// );
/// assert!(validate_url_str("ftp://x.com").is_err());
/// ```
pub fn validate_url_str(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AppError::invalid_url("url is missing"));
    }

    let url = Url::parse(trimmed).map_err(|_| AppError::invalid_url("url is malformed"))?;

    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        _ => Err(AppError::invalid_url("missing http:// or https:// prefix")),
    }
}
