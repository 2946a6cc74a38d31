//! # Login Gateway
//!
//! Server-rendered OAuth login form in front of a backend authorization
//! endpoint, built with Axum and Askama.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Login data model, error shape, endpoint computation
//! - **Application Layer** ([`application`]) - Form controller and navigation seam
//! - **Infrastructure Layer** ([`infrastructure`]) - Backend HTTP client
//! - **API Layer** ([`api`]) - Health endpoint and shared middleware
//! - **Web Layer** ([`web`]) - Login page and form submission
//!
//! ## Flow
//!
//! 1. The client application sends the user to `/oauth/authorize?client_id=...`
//! 2. The user submits email and password
//! 3. The credentials and OAuth parameters are posted as JSON to the backend
//!    (`/{stage}/oauth/login`)
//! 4. On success the browser is sent to the `redirectUri` the backend returned;
//!    on failure the form is shown again with the error
//!
//! ## Quick Start
//!
//! ```bash
//! export BACKEND_URL="https://auth.example.com"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{CapturedNavigation, FormState, LoginController, SubmitOutcome};
    pub use crate::domain::endpoint::Stage;
    pub use crate::domain::error_response::{ErrorKind, ErrorResponse};
    pub use crate::domain::login::{LoginRequest, LoginSuccess, OAuthParams};
    pub use crate::error::AppError;
    pub use crate::infrastructure::backend::{HttpLoginBackend, LoginBackend};
    pub use crate::state::AppState;
}
