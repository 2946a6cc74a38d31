//! HTTP implementation of the login backend.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::service::{ClientError, LoginBackend};
use crate::domain::error_response::ErrorResponse;
use crate::domain::login::{LoginRequest, LoginSuccess};

/// Backend client posting JSON with `reqwest`.
///
/// # Response Handling
///
/// - **200**: body parsed as [`LoginSuccess`]
/// - **non-200, JSON content type**: body parsed as [`ErrorResponse`]
/// - **non-200, any other content type**: fixed transport error, body discarded
/// - **network or decode failure**: fixed transport error
#[derive(Clone)]
pub struct HttpLoginBackend {
    client: Client,
}

impl HttpLoginBackend {
    /// Creates a client with an optional request timeout.
    ///
    /// With `None` the transport default applies.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(ClientError::Build)?;

        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LoginBackend for HttpLoginBackend {
    async fn login(
        &self,
        endpoint: &Url,
        request: &LoginRequest,
    ) -> Result<LoginSuccess, ErrorResponse> {
        debug!(%endpoint, client_id = ?request.client_id, "Posting login request");

        let response = self
            .client
            .post(endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| transport_failure(ClientError::Request(e)))?;

        let status = response.status();

        if status == StatusCode::OK {
            return response
                .json::<LoginSuccess>()
                .await
                .map_err(|e| transport_failure(ClientError::Decode(e)));
        }

        if !is_json(response.headers()) {
            warn!(%status, "Backend returned a non-JSON error response");
            return Err(ErrorResponse::transport());
        }

        match response.json::<ErrorResponse>().await {
            Ok(error) => {
                debug!(%status, error = %error, "Backend rejected login");
                Err(error)
            }
            Err(e) => Err(transport_failure(ClientError::Decode(e))),
        }
    }
}

/// Logs the underlying failure and returns the generic transport error.
fn transport_failure(error: ClientError) -> ErrorResponse {
    warn!(error = %error, "Login request failed");
    ErrorResponse::transport()
}

/// Checks whether the declared content type is JSON.
///
/// A missing `Content-Type` header counts as not JSON.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}
