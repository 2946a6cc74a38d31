mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use login_gateway::api::handlers::health_handler;
use login_gateway::config::Config;
use login_gateway::domain::endpoint::Stage;

fn health_app(config: Config) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state(config))
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = TestServer::new(health_app(common::test_config(
        "https://auth.example.com",
    )))
    .unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["stage"], serde_json::Value::Null);
    assert_eq!(json["checks"]["login_endpoint"]["status"], "ok");
    assert_eq!(
        json["checks"]["login_endpoint"]["message"],
        "https://auth.example.com/oauth/login"
    );
}

#[tokio::test]
async fn test_health_reports_fixed_stage() {
    let mut config = common::test_config("https://auth.example.com");
    config.stage = Some(Stage::Prod);
    let server = TestServer::new(health_app(config)).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["stage"], "prod");
    assert_eq!(
        json["checks"]["login_endpoint"]["message"],
        "https://auth.example.com/prod/oauth/login"
    );
}

#[tokio::test]
async fn test_health_degraded_on_bad_backend_url() {
    let server = TestServer::new(health_app(common::test_config("not a url"))).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["login_endpoint"]["status"], "error");
}
