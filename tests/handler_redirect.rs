mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use shorturl::api::handlers::redirect_handler;
use shorturl::domain::repositories::UrlRepository;
use shorturl::infrastructure::persistence::InMemoryUrlRepository;
use shorturl::infrastructure::resolver::NullResolver;
use shorturl::state::AppState;
use std::sync::Arc;

async fn redirect_server(urls: &[&str]) -> TestServer {
    let repository = Arc::new(InMemoryUrlRepository::new());
    for url in urls {
        repository.create(url).await;
    }

    let state = AppState::new(repository, Arc::new(NullResolver::new()));
    let app = Router::new()
        .route("/api/shorturl/{id}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let server = redirect_server(&["https://www.freecodecamp.org"]).await;

    let response = server.get("/api/shorturl/1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://www.freecodecamp.org");
}

#[tokio::test]
async fn test_redirect_second_entry() {
    let server = redirect_server(&["https://a.com", "https://b.com/page?x=1"]).await;

    let response = server.get("/api/shorturl/2").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://b.com/page?x=1");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = redirect_server(&["https://a.com"]).await;

    let response = server.get("/api/shorturl/9999").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "No short URL found for the given input" }));
}

#[tokio::test]
async fn test_redirect_zero_is_not_found() {
    let server = redirect_server(&["https://a.com"]).await;

    let response = server.get("/api/shorturl/0").await;

    response.assert_json(&json!({ "error": "No short URL found for the given input" }));
}

#[tokio::test]
async fn test_redirect_non_numeric_id() {
    let server = redirect_server(&["https://a.com"]).await;

    for path in ["/api/shorturl/abc", "/api/shorturl/1abc", "/api/shorturl/-1"] {
        let response = server.get(path).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "error": "invalid url" }));
    }
}

#[tokio::test]
async fn test_redirect_undecodable_id() {
    let server = redirect_server(&["https://a.com"]).await;

    let response = server.get("/api/shorturl/%FF").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));
}

#[tokio::test]
async fn test_redirect_encodes_non_ascii_location() {
    let server = redirect_server(&["https://münchen.de/straße"]).await;

    let response = server.get("/api/shorturl/1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://xn--mnchen-3ya.de/stra%C3%9Fe"
    );
}
