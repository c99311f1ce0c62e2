//! Repository trait for short URL records.

use crate::domain::entities::ShortUrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage port consumed by [`crate::application::services::ShortUrlService`].
///
/// The service holds no locks around these calls, so every method must be
/// safe to call concurrently for the same record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - Process-local maps
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, AppError>;

    /// Finds the record whose normalized long URL equals `long_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_by_long_url(&self, long_url: &str) -> Result<Option<ShortUrlRecord>, AppError>;

    /// Inserts or overwrites the record keyed by its code.
    ///
    /// After this returns, `get_by_long_url(&record.long_url)` resolves to the
    /// saved record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, record: ShortUrlRecord) -> Result<(), AppError>;

    /// Adds one click to the record with this code. Does nothing if the code
    /// is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_clicks(&self, code: &str) -> Result<(), AppError>;

    /// Number of stored records.
    async fn count(&self) -> Result<u64, AppError>;
}
