//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                  - Health check (public)
//! - `GET  /oauth/authorize`         - Login page
//! - `POST /oauth/authorize`         - Login submission (rate limited)
//! - `*    /{stage}/oauth/authorize` - Same, stage-prefixed
//!
//! # Middleware
//!
//! - **Tracing** - Request spans (path only, no query string)
//! - **Rate limiting** - Per-IP token bucket on login submissions (`POST` only)
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// When `state.config.behind_proxy` is set, rate limiting reads the client IP
/// from `X-Forwarded-For` / `X-Real-IP` instead of the peer socket address.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let login = web::routes::login_routes();
    let login = if state.config.behind_proxy {
        login.layer(rate_limit::proxied_layer())
    } else {
        login.layer(rate_limit::layer())
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(login)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
