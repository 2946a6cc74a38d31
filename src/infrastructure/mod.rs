//! Infrastructure layer for external integrations.
//!
//! This layer implements the seams used by the application layer, providing
//! concrete implementations that talk to the outside world.
//!
//! # Modules
//!
//! - [`backend`] - Backend authorization endpoint client (HTTP implementation)

pub mod backend;
