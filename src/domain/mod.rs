//! Domain layer containing the login data model.
//!
//! Everything here is independent of HTTP frameworks and transport: plain
//! data types plus the rules for turning them into a backend call.
//!
//! # Architecture
//!
//! - [`login`] - OAuth parameters, the outgoing login request and the success payload
//! - [`error_response`] - Unified error shape shown to the user
//! - [`endpoint`] - Stage detection and backend URL computation
//!
//! # Login Flow
//!
//! 1. The page request carries [`login::OAuthParams`] in its query string
//! 2. The user submits email and password
//! 3. A [`login::LoginRequest`] is assembled and posted to the URL from [`endpoint`]
//! 4. The backend answers with [`login::LoginSuccess`] or an
//!    [`error_response::ErrorResponse`]

pub mod endpoint;
pub mod error_response;
pub mod login;
