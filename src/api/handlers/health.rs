//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Service can build its backend login URL
/// - **503 Service Unavailable**: Backend URL is unusable
///
/// The backend itself is not called; it is an opaque service and a probe
/// login would be meaningless.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "stage": "prod",
///   "checks": {
///     "login_endpoint": {
///       "status": "ok",
///       "message": "https://auth.example.com/prod/oauth/login"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let endpoint_check = check_login_endpoint(&state);
    let healthy = endpoint_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        stage: state.config.stage.map(|s| s.to_string()),
        checks: HealthChecks {
            login_endpoint: endpoint_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Resolves the backend login URL for an unprefixed page path.
fn check_login_endpoint(state: &AppState) -> CheckStatus {
    match state.config.login_endpoint("/") {
        Ok(url) => CheckStatus {
            status: "ok".to_string(),
            message: Some(url.to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Invalid backend URL: {}", e)),
        },
    }
}
