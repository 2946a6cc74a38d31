//! Rate limiting middleware using token bucket algorithm.
//!
//! Only form submissions count against the quota; page loads pass through.

use axum::http::Method;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Replenish one request every this many seconds.
const PERIOD_SECONDS: u64 = 2;

/// Requests allowed in a burst before limiting kicks in.
const BURST_SIZE: u32 = 20;

/// Creates a rate limiter for the login routes.
///
/// # Limits
///
/// - **Rate**: 1 submission per 2 seconds
/// - **Burst**: 20 submissions
/// - **Methods**: `POST` only
///
/// Submissions exceeding the limit receive `429 Too Many Requests`. Slows down
/// password guessing without getting in the way of a person typing.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address.
///
/// # Example
///
/// ```rust,ignore
/// let app = web::routes::login_routes().layer(rate_limit::layer());
/// ```
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PERIOD_SECONDS)
            .burst_size(BURST_SIZE)
            .methods(vec![Method::POST])
            .finish()
            .expect("rate limit period and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Same limits as [`layer`], keyed by the client IP reported by a reverse proxy.
///
/// Reads `X-Forwarded-For`, `X-Real-IP` and `Forwarded`, falling back to the
/// peer address. Use only behind a trusted proxy; the headers are spoofable
/// otherwise.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(PERIOD_SECONDS)
            .burst_size(BURST_SIZE)
            .methods(vec![Method::POST])
            .finish()
            .expect("rate limit period and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
