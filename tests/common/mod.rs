#![allow(dead_code)]

use axum::Router;
use login_gateway::config::{Config, ErrorDisplay};
use login_gateway::infrastructure::backend::HttpLoginBackend;
use login_gateway::state::AppState;
use login_gateway::web::routes::login_routes;
use std::sync::Arc;

pub fn test_config(backend_url: &str) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        backend_url: backend_url.to_string(),
        stage: None,
        login_path: "/oauth/login".to_string(),
        error_display: ErrorDisplay::Inline,
        backend_timeout_seconds: Some(5),
        behind_proxy: false,
        product_name: "Plant Pot".to_string(),
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
    }
}

pub fn create_test_state(config: Config) -> AppState {
    let backend = HttpLoginBackend::new(config.backend_timeout()).unwrap();
    AppState::new(config, Arc::new(backend))
}

pub fn login_app(config: Config) -> Router {
    login_routes().with_state(create_test_state(config))
}

/// Credentials and OAuth parameters as the browser posts them.
pub fn login_form<'a>(email: &'a str, password: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("email", email),
        ("password", password),
        ("client_id", "abc"),
        ("scope", "openid profile"),
    ]
}
