mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use short_url::domain::repositories::ShortUrlRepository;

#[tokio::test]
async fn test_shorten_success() {
    let (server, repository) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["longUrl"], "https://example.com/");
    assert_eq!(json["shortUrl"], format!("{}/{}", common::BASE_URL, code));

    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_same_url_returns_same_code() {
    let (server, repository) = common::create_test_server();

    let first = common::shorten(&server, "https://example.com/page").await;
    let second = common::shorten(&server, "HTTPS://EXAMPLE.COM:443/page").await;

    assert_eq!(first["code"], second["code"]);
    assert_eq!(second["longUrl"], "https://example.com/page");
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_different_urls_get_different_codes() {
    let (server, repository) = common::create_test_server();

    let first = common::shorten(&server, "https://example.com/a").await;
    let second = common::shorten(&server, "https://example.com/b").await;

    assert_ne!(first["code"], second["code"]);
    assert_eq!(repository.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_shorten_invalid_urls() {
    let (server, repository) = common::create_test_server();

    for url in [
        json!(""),
        json!("   "),
        json!(42),
        json!(null),
        json!("ftp://x.com"),
        json!("example.com"),
    ] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": url.clone() }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<Value>();
        assert_eq!(json["error"], "InvalidUrlError", "input {url}");
        assert!(json["message"].is_string());
    }

    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (server, _repository) = common::create_test_server();

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"], "InvalidUrlError");
    assert_eq!(json["message"], "url is missing");
}

#[tokio::test]
async fn test_shorten_non_json_body() {
    let (server, _repository) = common::create_test_server();

    let response = server.post("/api/shorten").text("https://example.com").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "InvalidUrlError");
}

#[tokio::test]
async fn test_shorten_rejects_get() {
    let (server, _repository) = common::create_test_server();

    let response = server.get("/api/shorten").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
