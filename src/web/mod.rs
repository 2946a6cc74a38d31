//! Web layer serving the login page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`forms`] - Submitted form body and its required-field rules
//! - [`handlers`] - Page and submit handlers
//! - [`routes`] - Login route configuration
//! - [`views`] - Login page template

pub mod forms;
pub mod handlers;
pub mod routes;
pub mod views;
