//! OpenTelemetry trace export.
//!
//! Builds the process-wide `TracerProvider` once at startup. The provider is
//! handed to [`crate::telemetry::Telemetry`] explicitly; nothing here installs
//! a global tracer.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    runtime,
    trace::{Config, TracerProvider},
    Resource,
};

use crate::config::ObservabilityConfig;

/// Error type for trace exporter setup.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("failed to build OTLP span exporter for {endpoint}: {reason}")]
    Exporter { endpoint: String, reason: String },
}

/// Resource attributes attached to every exported span.
pub fn build_resource(config: &ObservabilityConfig) -> Resource {
    Resource::new(vec![
        KeyValue::new("service.name", config.service_name.clone()),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        KeyValue::new("guardian.layer", "observability"),
    ])
}

/// Build a provider that batches spans to the configured OTLP collector.
///
/// With export disabled the provider has no processor: spans still carry
/// valid trace ids but are dropped when they end.
#[allow(deprecated)]
pub fn init_tracer_provider(config: &ObservabilityConfig) -> Result<TracerProvider, TelemetryError> {
    let trace_config = Config::default().with_resource(build_resource(config));

    if !config.export_enabled {
        return Ok(TracerProvider::builder().with_config(trace_config).build());
    }

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otlp_endpoint.clone())
        .with_timeout(Duration::from_secs(config.otlp_timeout_secs))
        .build()
        .map_err(|e| TelemetryError::Exporter {
            endpoint: config.otlp_endpoint.clone(),
            reason: e.to_string(),
        })?;

    Ok(TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_config(trace_config)
        .build())
}

/// Like [`init_tracer_provider`], but falls back to a non-exporting provider
/// when the exporter cannot be built.
pub fn init_tracer_provider_or_local(config: &ObservabilityConfig) -> TracerProvider {
    match init_tracer_provider(config) {
        Ok(provider) => {
            tracing::info!(
                endpoint = %config.otlp_endpoint,
                service_name = %config.service_name,
                export_enabled = config.export_enabled,
                "OpenTelemetry configured"
            );
            provider
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Failed to initialize OTLP exporter, continuing without span export"
            );
            let local = ObservabilityConfig {
                export_enabled: false,
                ..config.clone()
            };
            match init_tracer_provider(&local) {
                Ok(provider) => provider,
                Err(_) => TracerProvider::builder().build(),
            }
        }
    }
}

/// Flush pending spans and shut the provider down.
///
/// Errors are logged; an unreachable collector never fails shutdown.
pub async fn shutdown_tracer_provider(provider: TracerProvider) {
    tracing::info!("Shutting down OpenTelemetry");
    let result = tokio::task::spawn_blocking(move || provider.shutdown()).await;
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(error = %e, "Span export did not flush cleanly"),
        Err(e) => tracing::warn!(error = %e, "Tracer shutdown task failed"),
    }
}
