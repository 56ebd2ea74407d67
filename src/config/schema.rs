//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure shared by the
//! demo services. All types derive Serde traits so a loaded configuration
//! can be dumped in logs or diagnostics.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Service name used when `OTEL_SERVICE_NAME` is unset.
pub const DEFAULT_SERVICE_NAME: &str = "guardian-telemetry";

/// Collector endpoint used when `OTEL_EXPORTER_OTLP_ENDPOINT` is unset.
pub const DEFAULT_OTLP_ENDPOINT: &str = "http://otel-collector:4317";

/// Root configuration for a demo service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Log output settings.
    pub logging: LoggingConfig,

    /// Trace export and metrics settings.
    pub observability: ObservabilityConfig,

    /// Simulated latency bounds for `/hello`.
    pub latency: LatencyConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Host or IP to bind (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port to bind.
    pub port: u16,
}

impl ListenerConfig {
    /// The `host:port` string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Log line format on stdout.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,

    /// Filter directive used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            default_filter: "guardian_demos=info,guardian_telemetry=info,guardian_policy=info,supply_chain=info,tower_http=info".to_string(),
        }
    }
}

/// Observability settings: trace export and optional metrics.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `service.name` resource attribute attached to every span.
    pub service_name: String,

    /// OTLP/gRPC collector endpoint.
    pub otlp_endpoint: String,

    /// Export timeout per batch, in seconds.
    pub otlp_timeout_secs: u64,

    /// When false, spans are still created (trace ids stay valid) but never exported.
    pub export_enabled: bool,

    /// Prometheus scrape endpoint; metrics are not exposed when unset.
    pub metrics_address: Option<SocketAddr>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            otlp_endpoint: DEFAULT_OTLP_ENDPOINT.to_string(),
            otlp_timeout_secs: 10,
            export_enabled: true,
            metrics_address: None,
        }
    }
}

/// Bounds of the simulated `/hello` latency, inclusive on both ends.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 10,
            max_delay_ms: 200,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}
