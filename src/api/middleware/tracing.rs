//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span, info_span};

/// Span factory used by [`layer`].
pub type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// Creates a tracing middleware for HTTP requests.
///
/// The authorize page carries `state` and `nonce` in its query string, so
/// spans record the path only. Form bodies are never logged.
///
/// Each request gets an `INFO` span with method, path and HTTP version, and
/// an `INFO` event on response with status and latency in milliseconds:
///
/// ```text
/// INFO request{method=GET path=/dev/oauth/authorize version=HTTP/1.1}: finished processing request latency=1 ms status=200
/// INFO request{method=POST path=/dev/oauth/authorize version=HTTP/1.1}: finished processing request latency=84 ms status=303
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeRequestSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(request_span as MakeRequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
    )
}
