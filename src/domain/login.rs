//! Login request and response models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// OAuth parameters received on the authorization page.
///
/// All values are optional and passed through verbatim; this service never
/// interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OAuthParams {
    pub client_id: Option<String>,
    pub state: Option<String>,
    pub nonce: Option<String>,
    pub redirect_uri: Option<String>,
    pub response_type: Option<String>,
    pub scope: Option<String>,
}

impl OAuthParams {
    /// Splits the space-delimited `scope` parameter into individual scopes.
    ///
    /// Returns an empty list when `scope` is absent.
    pub fn scopes(&self) -> Vec<String> {
        self.scope
            .as_deref()
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Returns the parameters that are present as `(query name, value)` pairs.
    ///
    /// Used to carry the parameters through the form post as hidden inputs.
    pub fn present(&self) -> Vec<(&'static str, &str)> {
        [
            ("client_id", &self.client_id),
            ("state", &self.state),
            ("nonce", &self.nonce),
            ("redirect_uri", &self.redirect_uri),
            ("response_type", &self.response_type),
            ("scope", &self.scope),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

/// Body of the backend login call.
///
/// Serialized as camelCase JSON:
///
/// ```json
/// {
///   "clientId": "abc",
///   "state": null,
///   "nonce": null,
///   "redirectUri": "https://app/cb",
///   "responseType": "id_token token",
///   "scopes": ["openid", "profile"],
///   "email": "a@b.com",
///   "password": "..."
/// }
/// ```
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub client_id: Option<String>,
    pub state: Option<String>,
    pub nonce: Option<String>,
    pub redirect_uri: Option<String>,
    pub response_type: Option<String>,
    pub scopes: Vec<String>,
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Assembles a request from the page parameters and the entered credentials.
    pub fn new(params: &OAuthParams, email: &str, password: &str) -> Self {
        Self {
            client_id: params.client_id.clone(),
            state: params.state.clone(),
            nonce: params.nonce.clone(),
            redirect_uri: params.redirect_uri.clone(),
            response_type: params.response_type.clone(),
            scopes: params.scopes(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("client_id", &self.client_id)
            .field("state", &self.state)
            .field("nonce", &self.nonce)
            .field("redirect_uri", &self.redirect_uri)
            .field("response_type", &self.response_type)
            .field("scopes", &self.scopes)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Successful login response from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSuccess {
    /// Where the browser must go next. Usually the client's callback with the
    /// issued tokens appended.
    pub redirect_uri: String,
}
