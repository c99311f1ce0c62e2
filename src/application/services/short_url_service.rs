//! Shortening and resolution service.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::entities::{ShortUrlRecord, ShortenedUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_url;

/// Maximum number of candidate codes tried before giving up on allocation.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 10;

/// Settings the service needs from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenerSettings {
    /// Prefix for public short URLs, e.g. `https://s.example.com`.
    pub base_url: String,
    /// Length of generated codes. Must be at least 1.
    pub code_length: usize,
}

/// Service for shortening URLs and resolving short codes.
///
/// Handles URL validation, deduplication by normalized long URL, collision-safe
/// code allocation and click tracking. All state lives in the repository.
///
/// # Concurrency
///
/// Creating a new record happens behind a write gate: after a dedup miss the
/// service takes the gate, repeats the long URL lookup and only then allocates
/// and saves. Concurrent requests for the same new URL therefore share one
/// code. Lookups and redirects never wait on the gate.
pub struct ShortUrlService<R: ShortUrlRepository, G: CodeGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: ShortenerSettings,
    write_gate: Mutex<()>,
}

impl<R: ShortUrlRepository, G: CodeGenerator> ShortUrlService<R, G> {
    /// Creates a new service.
    pub fn new(repository: Arc<R>, generator: Arc<G>, settings: ShortenerSettings) -> Self {
        Self {
            repository,
            generator,
            settings,
            write_gate: Mutex::new(()),
        }
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    /// Shortens a long URL, returning the existing code if it was shortened before.
    ///
    /// # Deduplication
    ///
    /// The input is normalized first; if a record for the normalized URL
    /// exists, its code is returned and nothing is written.
    ///
    /// # Code Generation
    ///
    /// Up to [`MAX_ALLOCATION_ATTEMPTS`] candidates are generated. Each one is
    /// checked against storage and discarded if taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the input fails validation.
    /// Returns [`AppError::AllocationExhausted`] if every candidate collided.
    /// Storage errors are propagated unchanged.
    pub async fn shorten(&self, raw_input: &Value) -> Result<ShortenedUrl, AppError> {
        let long_url = validate_url(raw_input)?;

        if let Some(existing) = self.repository.get_by_long_url(&long_url).await? {
            debug!(code = %existing.code, "Returning existing short code");
            return Ok(self.to_shortened(existing));
        }

        let _gate = self.write_gate.lock().await;

        if let Some(existing) = self.repository.get_by_long_url(&long_url).await? {
            debug!(code = %existing.code, "Short code created by a concurrent request");
            return Ok(self.to_shortened(existing));
        }

        let code = self.allocate_code().await?;
        let record = ShortUrlRecord::new(code, long_url);
        let shortened = self.to_shortened(record.clone());

        self.repository.save(record).await?;
        info!(code = %shortened.code, long_url = %shortened.long_url, "Created short URL");

        Ok(shortened)
    }

    /// Resolves a short code to its long URL and counts the click.
    ///
    /// The click is recorded before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn resolve_code(&self, code: &str) -> Result<String, AppError> {
        let record = self.find(code).await?;

        self.repository.increment_clicks(code).await?;

        Ok(record.long_url)
    }

    /// Returns the stored record for a code without touching its click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn get_meta(&self, code: &str) -> Result<ShortUrlRecord, AppError> {
        self.find(code).await
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }

    async fn find(&self, code: &str) -> Result<ShortUrlRecord, AppError> {
        self.repository
            .get_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("short code not found"))
    }

    /// Generates a code not yet present in storage.
    async fn allocate_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let code = self.generator.generate(self.settings.code_length);

            if self.repository.get_by_code(&code).await?.is_none() {
                return Ok(code);
            }

            debug!(%code, attempt, "Generated code already taken");
        }

        warn!(
            attempts = MAX_ALLOCATION_ATTEMPTS,
            code_length = self.settings.code_length,
            "Short code allocation exhausted"
        );

        Err(AppError::AllocationExhausted {
            attempts: MAX_ALLOCATION_ATTEMPTS,
        })
    }

    fn to_shortened(&self, record: ShortUrlRecord) -> ShortenedUrl {
        ShortenedUrl {
            short_url: self.short_url(&record.code),
            code: record.code,
            long_url: record.long_url,
        }
    }
}
