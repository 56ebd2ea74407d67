//! Configuration loading from the process environment.

use std::str::FromStr;

use crate::config::schema::{DemoConfig, LogFormat};
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_SERVICE_NAME: &str = "OTEL_SERVICE_NAME";
pub const ENV_OTLP_ENDPOINT: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";
pub const ENV_SDK_DISABLED: &str = "OTEL_SDK_DISABLED";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_METRICS_ADDRESS: &str = "METRICS_ADDRESS";
pub const ENV_MIN_DELAY_MS: &str = "HELLO_MIN_DELAY_MS";
pub const ENV_MAX_DELAY_MS: &str = "HELLO_MAX_DELAY_MS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Parse {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from the process environment.
///
/// `default_service_name` is used when `OTEL_SERVICE_NAME` is unset, so each
/// binary reports under its own name.
pub fn load_from_env(default_service_name: &str) -> Result<DemoConfig, ConfigError> {
    load_from_lookup(|var| std::env::var(var).ok(), default_service_name)
}

/// Load and validate configuration using an arbitrary variable lookup.
///
/// Blank values are treated as unset.
pub fn load_from_lookup<F>(lookup: F, default_service_name: &str) -> Result<DemoConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |var: &str| {
        lookup(var)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let mut config = DemoConfig::default();
    config.observability.service_name = default_service_name.to_string();

    if let Some(host) = get(ENV_HOST) {
        config.listener.host = host;
    }
    if let Some(port) = get(ENV_PORT) {
        config.listener.port = parse_var(ENV_PORT, &port)?;
    }
    if let Some(name) = get(ENV_SERVICE_NAME) {
        config.observability.service_name = name;
    }
    if let Some(endpoint) = get(ENV_OTLP_ENDPOINT) {
        config.observability.otlp_endpoint = endpoint;
    }
    if let Some(disabled) = get(ENV_SDK_DISABLED) {
        config.observability.export_enabled = !parse_bool(ENV_SDK_DISABLED, &disabled)?;
    }
    if let Some(format) = get(ENV_LOG_FORMAT) {
        config.logging.format = parse_log_format(&format)?;
    }
    if let Some(addr) = get(ENV_METRICS_ADDRESS) {
        config.observability.metrics_address = Some(parse_var(ENV_METRICS_ADDRESS, &addr)?);
    }
    if let Some(min) = get(ENV_MIN_DELAY_MS) {
        config.latency.min_delay_ms = parse_var(ENV_MIN_DELAY_MS, &min)?;
    }
    if let Some(max) = get(ENV_MAX_DELAY_MS) {
        config.latency.max_delay_ms = parse_var(ENV_MAX_DELAY_MS, &max)?;
    }
    if let Some(secs) = get(ENV_REQUEST_TIMEOUT_SECS) {
        config.timeouts.request_secs = parse_var(ENV_REQUEST_TIMEOUT_SECS, &secs)?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Parse {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Parse {
            var,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "text" | "pretty" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::Parse {
            var: ENV_LOG_FORMAT,
            value: value.to_string(),
            reason: "expected text or json".to_string(),
        }),
    }
}
