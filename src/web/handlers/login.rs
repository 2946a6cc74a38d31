//! Login page and form submission handlers.

use axum::{
    extract::{Form, OriginalUri, Query, State, rejection::FormRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::application::{CapturedNavigation, FormState, LoginController};
use crate::domain::error_response::ErrorResponse;
use crate::domain::login::OAuthParams;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::LoginForm;
use crate::web::views::LoginPage;

/// Renders the empty login form.
///
/// # Endpoint
///
/// `GET /oauth/authorize` (or `GET /{stage}/oauth/authorize`)
///
/// # Query Parameters
///
/// `client_id`, `state`, `nonce`, `redirect_uri`, `response_type`, `scope`,
/// all optional. They are embedded in the form as hidden inputs and passed
/// through to the backend untouched.
pub async fn login_page_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<OAuthParams>,
) -> Response {
    debug!(path = uri.path(), client_id = ?params.client_id, "Rendering login page");

    let page = LoginPage::new(&state.config, &params, &FormState::default());
    render(StatusCode::OK, page)
}

/// Handles the login form submission.
///
/// # Endpoint
///
/// `POST /oauth/authorize` (or `POST /{stage}/oauth/authorize`)
///
/// # Request Flow
///
/// 1. Check required fields; on failure re-render with `422`
/// 2. Resolve the backend endpoint from configuration and the page path
/// 3. Run one submission through a [`LoginController`]
/// 4. On success, `303 See Other` to the redirect URI returned by the backend
/// 5. On failure, re-render the form with the error and the entered values
///
/// A redirect URI that cannot be sent as a `Location` header (control
/// characters) is treated as a transport failure and re-renders the form.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a valid urlencoded form.
/// Returns 500 Internal Server Error if the backend URL cannot be built.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form.map_err(|rejection| {
        AppError::bad_request(
            "Invalid form submission",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    if let Some(violation) = form.violation() {
        debug!(field = ?violation.param_name, "Rejecting incomplete login form");
        let snapshot = FormState {
            email: form.email,
            password: form.password,
            loading: false,
            error: Some(violation),
        };
        let page = LoginPage::new(&state.config, &form.params, &snapshot);
        return Ok(render(StatusCode::UNPROCESSABLE_ENTITY, page));
    }

    let endpoint = state.config.login_endpoint(uri.path()).map_err(|e| {
        error!(error = %e, "Failed to build backend login URL");
        AppError::internal("Login endpoint is misconfigured", json!({}))
    })?;

    let navigator = Arc::new(CapturedNavigation::new());
    let controller = LoginController::new(
        state.backend.clone(),
        navigator.clone(),
        endpoint,
        form.params,
    );
    controller.change("email", &form.email);
    controller.change("password", &form.password);

    controller.submit().await;

    let mut snapshot = controller.snapshot();
    if let Some(target) = navigator.take() {
        if HeaderValue::from_str(&target).is_ok() {
            return Ok(Redirect::to(&target).into_response());
        }
        warn!("Backend returned a redirect URI that is not a valid Location header");
        snapshot.error = Some(ErrorResponse::transport());
    }

    let page = LoginPage::new(&state.config, controller.params(), &snapshot);
    Ok(render(StatusCode::OK, page))
}

/// Renders the page with caching disabled; it may echo entered credentials.
fn render(status: StatusCode, page: LoginPage) -> Response {
    (status, [(header::CACHE_CONTROL, "no-store")], page).into_response()
}
