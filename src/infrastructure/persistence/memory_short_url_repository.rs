//! In-memory implementation of the short URL repository.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::entities::ShortUrlRecord;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    by_code: HashMap<String, ShortUrlRecord>,
    /// long_url -> code
    by_long_url: HashMap<String, String>,
}

/// Process-local repository backed by two hash maps.
///
/// Both maps sit behind one lock, so the primary table and the long URL index
/// never disagree between calls. Data lives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryShortUrlRepository {
    tables: RwLock<Tables>,
}

impl InMemoryShortUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn get_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, AppError> {
        Ok(self.tables.read().by_code.get(code).cloned())
    }

    async fn get_by_long_url(&self, long_url: &str) -> Result<Option<ShortUrlRecord>, AppError> {
        let tables = self.tables.read();

        Ok(tables
            .by_long_url
            .get(long_url)
            .and_then(|code| tables.by_code.get(code))
            .cloned())
    }

    async fn save(&self, record: ShortUrlRecord) -> Result<(), AppError> {
        let mut tables = self.tables.write();

        if let Some(previous) = tables.by_code.get(&record.code)
            && previous.long_url != record.long_url
        {
            let stale_url = previous.long_url.clone();
            if tables.by_long_url.get(&stale_url) == Some(&record.code) {
                tables.by_long_url.remove(&stale_url);
            }
        }

        tables
            .by_long_url
            .insert(record.long_url.clone(), record.code.clone());
        tables.by_code.insert(record.code.clone(), record);

        Ok(())
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        if let Some(record) = self.tables.write().by_code.get_mut(code) {
            record.clicks = record.clicks.saturating_add(1);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.tables.read().by_code.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, url: &str) -> ShortUrlRecord {
        ShortUrlRecord::new(code.to_string(), url.to_string())
    }

    #[tokio::test]
    async fn test_save_then_lookup_both_ways() {
        let repo = InMemoryShortUrlRepository::new();
        repo.save(record("abc123", "https://example.com/"))
            .await
            .unwrap();

        let by_code = repo.get_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(by_code.long_url, "https://example.com/");

        let by_url = repo
            .get_by_long_url("https://example.com/")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_url.code, "abc123");
    }

    #[tokio::test]
    async fn test_overwrite_drops_stale_index_entry() {
        let repo = InMemoryShortUrlRepository::new();
        repo.save(record("abc123", "https://old.com/")).await.unwrap();
        repo.save(record("abc123", "https://new.com/")).await.unwrap();

        assert!(
            repo.get_by_long_url("https://old.com/")
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(
            repo.get_by_long_url("https://new.com/")
                .await
                .unwrap()
                .unwrap()
                .code,
            "abc123"
        );
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_overwrite_keeps_index_owned_by_other_code() {
        let repo = InMemoryShortUrlRepository::new();
        repo.save(record("first1", "https://a.com/")).await.unwrap();
        repo.save(record("second", "https://a.com/")).await.unwrap();
        repo.save(record("first1", "https://b.com/")).await.unwrap();

        let owner = repo.get_by_long_url("https://a.com/").await.unwrap().unwrap();
        assert_eq!(owner.code, "second");
    }

    #[tokio::test]
    async fn test_increment_clicks() {
        let repo = InMemoryShortUrlRepository::new();
        repo.save(record("abc123", "https://example.com/"))
            .await
            .unwrap();

        repo.increment_clicks("abc123").await.unwrap();
        repo.increment_clicks("abc123").await.unwrap();

        let stored = repo.get_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(stored.clicks, 2);

        let via_index = repo
            .get_by_long_url("https://example.com/")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(via_index.clicks, 2);
    }

    #[tokio::test]
    async fn test_increment_unknown_code_is_noop() {
        let repo = InMemoryShortUrlRepository::new();
        repo.increment_clicks("missing").await.unwrap();

        assert!(repo.get_by_code("missing").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
