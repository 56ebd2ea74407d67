//! Correlation middleware.
//! Opens the request's server span and stamps `X-Trace-Id` on the response.

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::observability::metrics;
use crate::telemetry::Telemetry;

/// Response header carrying the correlation id.
pub const X_TRACE_ID: HeaderName = HeaderName::from_static("x-trace-id");

pub async fn correlation_middleware(
    State(telemetry): State<Telemetry>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let trace = telemetry.begin_request(&method, &path);
    let correlation_id = trace.correlation_id();
    request.extensions_mut().insert(trace.clone());

    let mut response = next.run(request).await;
    let status = response.status();
    let unmatched = status == StatusCode::NOT_FOUND;
    if unmatched {
        trace.rename(method.clone());
    }
    trace.finish(status);

    tracing::info!(
        trace_id = %correlation_id,
        method = %method,
        path = %path,
        status = status.as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );
    let route = if unmatched { "unmatched" } else { path.as_str() };
    metrics::record_request(&method, route, status.as_u16(), start);

    response
        .headers_mut()
        .insert(X_TRACE_ID, correlation_id.to_header_value());
    response
}
