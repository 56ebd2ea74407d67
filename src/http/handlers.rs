//! Telemetry demo request handlers.
//!
//! Each handler receives the shared [`Telemetry`] as state and the request's
//! [`RequestTrace`] as an extension inserted by the correlation middleware.

use std::time::Duration;

use axum::{extract::State, Extension, Json};
use opentelemetry::{trace::Span as _, KeyValue};
use serde::Serialize;

use crate::observability::metrics;
use crate::telemetry::{RequestTrace, Telemetry, ANOMALY_ATTRIBUTE, DELAY_ATTRIBUTE};

/// `{"status": ...}` payload.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

/// Response of `GET /hello`.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
    pub delay_ms: u64,
}

pub async fn health() -> Json<StatusBody> {
    Json(StatusBody { status: "ok" })
}

/// Sleep for a sampled delay, then report it.
///
/// The same `delay_ms` value is recorded on the span, logged, and returned.
pub async fn hello(
    State(telemetry): State<Telemetry>,
    Extension(trace): Extension<RequestTrace>,
) -> Json<HelloResponse> {
    let mut span = telemetry.start_span("hello-handler", &trace);
    let delay_ms = telemetry.latency().sample_ms();
    span.set_attribute(KeyValue::new(DELAY_ATTRIBUTE, delay_ms as i64));

    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    tracing::info!(
        trace_id = %trace.correlation_id(),
        delay_ms,
        "Handled /hello with delay {}ms",
        delay_ms
    );
    metrics::record_hello_delay(delay_ms);
    span.end();

    Json(HelloResponse {
        message: "Telemetry engaged",
        delay_ms,
    })
}

/// Label the request as an anomaly. There is no detection logic behind it.
pub async fn simulate_anomaly(
    State(telemetry): State<Telemetry>,
    Extension(trace): Extension<RequestTrace>,
) -> Json<StatusBody> {
    let mut span = telemetry.start_span("simulate-anomaly", &trace);
    span.set_attribute(KeyValue::new(ANOMALY_ATTRIBUTE, true));

    tracing::warn!(
        trace_id = %trace.correlation_id(),
        "Anomaly endpoint invoked: simulate Falco alert correlation"
    );
    metrics::record_anomaly();
    span.end();

    Json(StatusBody {
        status: "anomaly-triggered",
    })
}
