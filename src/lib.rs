//! Guardian demo services library.
//!
//! Three small HTTP services used in container-security and observability
//! demos: the instrumented telemetry service, the policy demo page and the
//! supply-chain status endpoint.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod policy;
pub mod supply_chain;
pub mod telemetry;

pub use config::DemoConfig;
pub use http::HttpServer;
pub use telemetry::{CorrelationId, LatencyProfile, RequestTrace, Telemetry};
