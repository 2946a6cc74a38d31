//! HTML handlers for the login page.

mod login;

pub use login::{login_page_handler, login_submit_handler};
