//! Login page template.

use askama::Template;
use askama_web::WebTemplate;
use chrono::{Datelike, Utc};

use crate::application::FormState;
use crate::config::{Config, ErrorDisplay};
use crate::domain::login::OAuthParams;

/// Inputs rendered on the form. An error attributed to anything else is shown
/// in the banner.
const FORM_FIELDS: [&str; 2] = ["email", "password"];

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Error banner (only when there is something to show)
/// - Email and password inputs, optionally marked invalid
/// - Submit button with a spinner while loading
/// - OAuth parameters as hidden inputs
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub product_name: String,
    pub year: i32,
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub alert: Option<String>,
    pub email_invalid: bool,
    pub password_invalid: bool,
    pub field_message: Option<String>,
    pub hidden_fields: Vec<(&'static str, String)>,
}

impl LoginPage {
    /// Builds the page for a form snapshot.
    ///
    /// With [`ErrorDisplay::Inline`], an error naming one of the inputs marks
    /// that input invalid instead of showing the banner. With
    /// [`ErrorDisplay::Banner`] every error goes to the banner.
    pub fn new(config: &Config, params: &OAuthParams, form: &FormState) -> Self {
        let field = form
            .error
            .as_ref()
            .and_then(|e| e.param_name.as_deref())
            .filter(|name| FORM_FIELDS.contains(name))
            .filter(|_| config.error_display == ErrorDisplay::Inline);

        let (alert, field_message) = match (&form.error, field) {
            (Some(error), Some(_)) => (None, Some(error.message.clone())),
            (Some(error), None) => (Some(error.message.clone()), None),
            (None, _) => (None, None),
        };

        Self {
            product_name: config.product_name.clone(),
            year: Utc::now().year(),
            email: form.email.clone(),
            password: form.password.clone(),
            loading: form.loading,
            alert,
            email_invalid: field == Some("email"),
            password_invalid: field == Some("password"),
            field_message,
            hidden_fields: params
                .present()
                .into_iter()
                .map(|(name, value)| (name, value.to_string()))
                .collect(),
        }
    }
}
