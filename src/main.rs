//! Guardian telemetry demo service.
//!
//! Emits one trace per request, simulates latency on `/hello`, raises a
//! simulated anomaly on `/simulate-anomaly`, and returns the trace id in
//! `X-Trace-Id` on every response.
//!
//! # Environment
//! - `PORT`, `HOST`: listener (default `0.0.0.0:8080`)
//! - `OTEL_SERVICE_NAME`: service name (default `guardian-telemetry`)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector (default `http://otel-collector:4317`)
//! - `OTEL_SDK_DISABLED`: `true` keeps spans local
//! - `METRICS_ADDRESS`: optional Prometheus scrape address
//! - `LOG_FORMAT`, `RUST_LOG`: log output

use guardian_demos::config::{load_from_env, schema::DEFAULT_SERVICE_NAME};
use guardian_demos::lifecycle::{signals::wait_for_signal, startup::bind_listener};
use guardian_demos::observability::{logging::init_logging, metrics, tracing as otel};
use guardian_demos::{HttpServer, LatencyProfile, Telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env(DEFAULT_SERVICE_NAME)?;
    init_logging(&config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address(),
        min_delay_ms = config.latency.min_delay_ms,
        max_delay_ms = config.latency.max_delay_ms,
        "guardian-telemetry starting"
    );

    let provider = otel::init_tracer_provider_or_local(&config.observability);

    if let Some(addr) = config.observability.metrics_address {
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(metrics_address = %addr, error = %e, "Failed to start metrics endpoint");
        }
    }

    let telemetry = Telemetry::new(&provider, LatencyProfile::from(&config.latency));
    let listener = bind_listener(&config.listener).await?;

    let server = HttpServer::telemetry(telemetry, &config.timeouts);
    let result = server.run(listener, wait_for_signal()).await;

    otel::shutdown_tracer_provider(provider).await;
    result?;

    tracing::info!("Shutdown complete");
    Ok(())
}
