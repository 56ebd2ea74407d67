//! Metrics collection and exposition.
//!
//! # Metrics
//! - `guardian_requests_total` (counter): requests by method, route, status
//! - `guardian_request_duration_seconds` (histogram): latency by route
//! - `guardian_hello_delay_ms` (histogram): sampled `/hello` delays
//! - `guardian_anomalies_total` (counter): simulated anomalies raised
//!
//! Recording goes through the `metrics` facade and is a no-op until
//! [`init_metrics`] installs the Prometheus recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one completed request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let route = route.to_string();
    counter!(
        "guardian_requests_total",
        "method" => method.to_string(),
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("guardian_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_hello_delay(delay_ms: u64) {
    histogram!("guardian_hello_delay_ms").record(delay_ms as f64);
}

pub fn record_anomaly() {
    counter!("guardian_anomalies_total").increment(1);
}
