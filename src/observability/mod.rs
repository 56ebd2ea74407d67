//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handlers produce:
//!     → logging.rs (structured log events on stdout)
//!     → metrics.rs (counters, histograms)
//!     → tracing.rs (OTLP span export to the collector)
//!
//! Consumers:
//!     → Log aggregation (stdout scrape)
//!     → Metrics endpoint (Prometheus scrape, optional)
//!     → OpenTelemetry collector (OTLP/gRPC)
//! ```
//!
//! # Design Decisions
//! - Export is best-effort: a dead collector never fails a request
//! - Log events carry the trace id so logs and traces can be joined
//! - Metrics recording is a no-op until an exporter is installed

pub mod logging;
pub mod metrics;
pub mod tracing;
