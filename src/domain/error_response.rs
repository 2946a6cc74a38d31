//! Error shown to the user after a failed login attempt.
//!
//! Backends in the wild answer with one of two JSON shapes:
//!
//! ```json
//! { "error": "invalid_credentials" }
//! ```
//!
//! ```json
//! { "type": "Bad Request", "statusCode": 400, "message": "...", "paramName": "email" }
//! ```
//!
//! Both deserialize into the single [`ErrorResponse`] type.

use serde::Deserialize;
use std::fmt;

/// Message used whenever the backend could not be understood.
pub const TRANSPORT_ERROR_MESSAGE: &str = "An error occurred while communicating with the server.";

/// Message used when a JSON error body carries no text at all.
const UNKNOWN_ERROR_MESSAGE: &str = "Login failed.";

/// Classification of a login failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The error names the offending input field.
    Validation,
    /// The backend reported a failure without field attribution.
    Server,
    /// Network failure or an error body that is not JSON.
    Transport,
}

/// Unified login error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "WireError")]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
    /// Name of the input the error is attributed to (`email`, `password`).
    pub param_name: Option<String>,
}

impl ErrorResponse {
    /// An error attributed to a specific input field.
    pub fn validation(param_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
            param_name: Some(param_name.into()),
        }
    }

    /// A server-reported error without field attribution.
    pub fn server(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Server,
            message: message.into(),
            param_name: None,
        }
    }

    /// The fixed error used for transport failures.
    pub fn transport() -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: TRANSPORT_ERROR_MESSAGE.to_string(),
            param_name: None,
        }
    }

    /// Returns `true` when this error is attributed to `field`.
    pub fn is_for_field(&self, field: &str) -> bool {
        self.param_name.as_deref() == Some(field)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param_name {
            Some(param) => write!(f, "{} ({})", self.message, param),
            None => f.write_str(&self.message),
        }
    }
}

/// Superset of both backend error shapes.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireError {
    error: Option<String>,
    message: Option<String>,
    param_name: Option<String>,
}

impl From<WireError> for ErrorResponse {
    fn from(wire: WireError) -> Self {
        let message = wire
            .message
            .or(wire.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());

        match wire.param_name.filter(|p| !p.is_empty()) {
            Some(param) => Self::validation(param, message),
            None => Self::server(message),
        }
    }
}
