//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the loader handles parsing)
//! - Validate value ranges (delay bounds ordered, timeouts > 0)
//! - Validate the collector endpoint shape
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DemoConfig → Result<(), Vec<ValidationError>>

use crate::config::schema::DemoConfig;

/// Upper limit for the simulated delay.
pub const MAX_SIMULATED_DELAY_MS: u64 = 60_000;

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener host must not be empty")]
    EmptyHost,

    #[error("service name must not be empty")]
    EmptyServiceName,

    #[error("OTLP endpoint {0:?} must start with http:// or https://")]
    InvalidEndpoint(String),

    #[error("minimum delay {min}ms exceeds maximum delay {max}ms")]
    InvertedDelayBounds { min: u64, max: u64 },

    #[error("maximum delay {0}ms exceeds the 60000ms limit")]
    DelayTooLarge(u64),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("request timeout {timeout_secs}s does not cover maximum delay {max_delay_ms}ms")]
    TimeoutBelowDelay { timeout_secs: u64, max_delay_ms: u64 },
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &DemoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    if config.observability.service_name.trim().is_empty() {
        errors.push(ValidationError::EmptyServiceName);
    }

    let endpoint = &config.observability.otlp_endpoint;
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        errors.push(ValidationError::InvalidEndpoint(endpoint.clone()));
    }

    let latency = &config.latency;
    if latency.min_delay_ms > latency.max_delay_ms {
        errors.push(ValidationError::InvertedDelayBounds {
            min: latency.min_delay_ms,
            max: latency.max_delay_ms,
        });
    }
    if latency.max_delay_ms > MAX_SIMULATED_DELAY_MS {
        errors.push(ValidationError::DelayTooLarge(latency.max_delay_ms));
    }

    let timeout_secs = config.timeouts.request_secs;
    if timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    } else if timeout_secs.saturating_mul(1000) <= latency.max_delay_ms {
        errors.push(ValidationError::TimeoutBelowDelay {
            timeout_secs,
            max_delay_ms: latency.max_delay_ms,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
