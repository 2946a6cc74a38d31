//! Application layer mediating between user input and the backend.
//!
//! - [`controller::LoginController`] - Form state, submission lifecycle and result handling
//! - [`navigator::Navigator`] - Injected browser navigation

pub mod controller;
pub mod navigator;

pub use controller::{FormState, LoginController, SubmitOutcome};
pub use navigator::{CapturedNavigation, Navigator};
