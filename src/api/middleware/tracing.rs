//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the tracing middleware applied to every route.
///
/// Opens an `INFO` span per request (method, URI, HTTP version) and logs
/// the response status with latency in milliseconds.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/my-link version=HTTP/1.1}: finished processing request latency=1 ms status=302
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
