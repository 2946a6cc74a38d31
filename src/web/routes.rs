//! Login route configuration.

use crate::domain::endpoint::Stage;
use crate::state::AppState;
use crate::web::handlers::{login_page_handler, login_submit_handler};
use axum::{Router, routing::get};

/// Path of the authorization page, optionally behind a stage prefix.
pub const AUTHORIZE_PATH: &str = "/oauth/authorize";

/// Public login routes.
///
/// # Endpoints
///
/// - `GET  /oauth/authorize`         - Login page
/// - `POST /oauth/authorize`         - Login form submission
/// - `GET  /{stage}/oauth/authorize` - Same, for `prod`, `dev` and `test`
/// - `POST /{stage}/oauth/authorize`
///
/// The stage prefix of the page path selects the backend deployment unless a
/// stage is fixed in configuration.
pub fn login_routes() -> Router<AppState> {
    let mut router = Router::new().route(
        AUTHORIZE_PATH,
        get(login_page_handler).post(login_submit_handler),
    );

    for stage in Stage::ALL {
        router = router.route(
            &format!("/{}{}", stage, AUTHORIZE_PATH),
            get(login_page_handler).post(login_submit_handler),
        );
    }

    router
}
