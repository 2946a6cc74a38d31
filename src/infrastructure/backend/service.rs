//! Login backend trait and client error types.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::domain::error_response::ErrorResponse;
use crate::domain::login::{LoginRequest, LoginSuccess};

/// Failures inside the HTTP client.
///
/// Never shown to the user: every variant collapses into
/// [`ErrorResponse::transport`] once logged.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to backend failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to decode backend response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Trait for performing the backend login call.
///
/// Implementations perform exactly one attempt per call and never retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpLoginBackend`] - JSON over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginBackend: Send + Sync {
    /// Posts `request` to `endpoint`.
    ///
    /// # Returns
    ///
    /// - `Ok(success)` when the backend accepted the credentials
    /// - `Err(error)` for any failure, already normalized for display
    async fn login(
        &self,
        endpoint: &Url,
        request: &LoginRequest,
    ) -> Result<LoginSuccess, ErrorResponse>;
}
