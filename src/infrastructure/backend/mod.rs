//! Client for the backend authorization endpoint.
//!
//! Provides a [`LoginBackend`] trait with one production implementation:
//! - [`HttpLoginBackend`] - `reqwest`-based JSON client

mod http_backend;
mod service;

pub use http_backend::HttpLoginBackend;
pub use service::{ClientError, LoginBackend};

#[cfg(test)]
pub use service::MockLoginBackend;
