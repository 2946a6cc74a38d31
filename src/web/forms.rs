//! Submitted login form.

use serde::Deserialize;
use validator::Validate;

use crate::domain::error_response::ErrorResponse;
use crate::domain::login::OAuthParams;

/// Fields checked in this order; the first violation is reported.
const FIELDS: [&str; 2] = ["email", "password"];

/// Body of `POST /oauth/authorize`.
///
/// Carries the credentials plus the OAuth parameters echoed back from the
/// page's hidden inputs. The rules mirror the inputs' `required` and
/// `type="email"` attributes for browsers that skip them.
#[derive(Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(flatten)]
    pub params: OAuthParams,
}

impl LoginForm {
    /// Returns the first rule violation as a field-attributed error.
    pub fn violation(&self) -> Option<ErrorResponse> {
        let errors = self.validate().err()?;
        let field_errors = errors.field_errors();

        FIELDS.into_iter().find_map(|field| {
            let errs = field_errors.get(field)?;
            let error = errs
                .iter()
                .find(|e| e.code == "length")
                .or_else(|| errs.first())?;

            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {}", field));

            Some(ErrorResponse::validation(field, message))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
            params: OAuthParams::default(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(form("a@b.com", "pw123").violation().is_none());
    }

    #[test]
    fn test_missing_email_reported_first() {
        let error = form("", "").violation().unwrap();

        assert!(error.is_for_field("email"));
        assert_eq!(error.message, "Email is required");
    }

    #[test]
    fn test_malformed_email() {
        let error = form("not-an-email", "pw123").violation().unwrap();

        assert!(error.is_for_field("email"));
        assert_eq!(error.message, "Enter a valid email address");
    }

    #[test]
    fn test_missing_password() {
        let error = form("a@b.com", "").violation().unwrap();

        assert!(error.is_for_field("password"));
        assert_eq!(error.message, "Password is required");
    }

    #[test]
    fn test_deserialize_with_oauth_params() {
        let form: LoginForm = serde_json::from_value(serde_json::json!({
            "email": "a@b.com",
            "password": "pw123",
            "client_id": "abc",
            "scope": "openid profile"
        }))
        .unwrap();

        assert_eq!(form.params.client_id.as_deref(), Some("abc"));
        assert_eq!(form.params.scopes(), vec!["openid", "profile"]);
        assert_eq!(form.params.state, None);
    }
}
