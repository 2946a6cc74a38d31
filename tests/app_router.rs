mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::StatusCode;
use axum_test::TestServer;
use login_gateway::config::Config;
use login_gateway::routes::app_router;
use serde_json::json;
use std::net::SocketAddr;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves the full router over a real socket so the rate limiter sees a peer address.
fn full_app(config: Config) -> TestServer {
    let app = app_router(common::create_test_state(config));

    TestServer::builder()
        .http_transport()
        .build(ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app))
        .unwrap()
}

#[tokio::test]
async fn test_page_loads_are_not_rate_limited() {
    let server = full_app(common::test_config("http://127.0.0.1:1"));

    for _ in 0..25 {
        server.get("/oauth/authorize").await.assert_status_ok();
    }
}

#[tokio::test]
async fn test_submissions_past_burst_are_rate_limited() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid_credentials" })),
        )
        .mount(&backend)
        .await;

    let server = full_app(common::test_config(&backend.uri()));

    let mut statuses = Vec::new();
    for _ in 0..25 {
        let response = server
            .post("/oauth/authorize")
            .form(&common::login_form("a@b.com", "pw123"))
            .await;
        statuses.push(response.status_code());
    }

    assert!(statuses[..20].iter().all(|s| *s == StatusCode::OK));
    assert!(statuses[20..].contains(&StatusCode::TOO_MANY_REQUESTS));

    // Page loads from the same client still work.
    server.get("/oauth/authorize").await.assert_status_ok();
}

#[tokio::test]
async fn test_trailing_slash_and_health() {
    let server = full_app(common::test_config("https://auth.example.com"));

    server.get("/oauth/authorize/").await.assert_status_ok();
    server.get("/dev/oauth/authorize/").await.assert_status_ok();

    let json = server.get("/health").await.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
}
