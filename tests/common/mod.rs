#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use short_url::application::services::{ShortUrlService, ShortenerSettings};
use short_url::domain::entities::ShortUrlRecord;
use short_url::domain::repositories::ShortUrlRepository;
use short_url::infrastructure::persistence::InMemoryShortUrlRepository;
use short_url::routes::router;
use short_url::state::AppState;
use short_url::utils::code_generator::RandomCodeGenerator;
use std::sync::Arc;

pub const BASE_URL: &str = "http://short.ly";

pub fn create_test_state() -> (AppState, Arc<InMemoryShortUrlRepository>) {
    let repository = Arc::new(InMemoryShortUrlRepository::new());

    let service = Arc::new(ShortUrlService::new(
        repository.clone(),
        Arc::new(RandomCodeGenerator::new()),
        ShortenerSettings {
            base_url: BASE_URL.to_string(),
            code_length: 6,
        },
    ));

    (AppState::new(service), repository)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryShortUrlRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    (server, repository)
}

pub async fn create_test_record(repository: &InMemoryShortUrlRepository, code: &str, url: &str) {
    repository
        .save(ShortUrlRecord::new(code.to_string(), url.to_string()))
        .await
        .unwrap();
}

pub async fn shorten(server: &TestServer, url: &str) -> Value {
    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": url }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
