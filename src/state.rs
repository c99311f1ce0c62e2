//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortUrlService;
use crate::infrastructure::persistence::InMemoryShortUrlRepository;
use crate::utils::code_generator::RandomCodeGenerator;

/// The service as wired for the running server.
pub type AppShortUrlService = ShortUrlService<InMemoryShortUrlRepository, RandomCodeGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<AppShortUrlService>,
}

impl AppState {
    pub fn new(short_url_service: Arc<AppShortUrlService>) -> Self {
        Self { short_url_service }
    }
}
