//! Request telemetry: span creation, correlation ids and simulated latency.
//!
//! # Data Flow
//! ```text
//! request arrives
//!     → Telemetry::begin_request (server span, RequestTrace)
//!     → handler opens child span via Telemetry::start_span
//!     → handler records attributes, logs with the trace id
//!     → RequestTrace::finish (status, end server span)
//!     → X-Trace-Id written from RequestTrace::correlation_id
//! ```
//!
//! # Design Decisions
//! - `Telemetry` is built once from the provider and injected as router state
//! - The active span travels in `RequestTrace`, never in thread-local state
//! - Tests build `Telemetry` over an in-memory exporter

pub mod context;
pub mod latency;

pub use context::{CorrelationId, RequestTrace};
pub use latency::LatencyProfile;

use opentelemetry::{
    trace::{SpanKind, TraceContextExt, Tracer as _, TracerProvider as _},
    Context, KeyValue,
};
use opentelemetry_sdk::trace::{Span, Tracer, TracerProvider};

/// Instrumentation scope name for spans produced by this crate.
pub const TRACER_NAME: &str = "guardian.telemetry";

/// Span attribute carrying the simulated `/hello` delay.
pub const DELAY_ATTRIBUTE: &str = "guardian.delay_ms";

/// Span attribute marking a simulated anomaly.
pub const ANOMALY_ATTRIBUTE: &str = "guardian.anomaly";

/// Tracer and latency settings shared by all handlers.
#[derive(Clone)]
pub struct Telemetry {
    tracer: Tracer,
    latency: LatencyProfile,
}

impl Telemetry {
    pub fn new(provider: &TracerProvider, latency: LatencyProfile) -> Self {
        Self {
            tracer: provider.tracer(TRACER_NAME),
            latency,
        }
    }

    pub fn latency(&self) -> &LatencyProfile {
        &self.latency
    }

    /// Open the server span for an incoming request.
    ///
    /// Every request starts a fresh trace; no parent is read from ambient state.
    pub fn begin_request(&self, method: &str, path: &str) -> RequestTrace {
        let span = self
            .tracer
            .span_builder(format!("{method} {path}"))
            .with_kind(SpanKind::Server)
            .with_attributes(vec![
                KeyValue::new("http.request.method", method.to_string()),
                KeyValue::new("url.path", path.to_string()),
            ])
            .start_with_context(&self.tracer, &Context::new());
        RequestTrace::new(Context::new().with_span(span))
    }

    /// Open a child span of the request's server span.
    pub fn start_span(&self, name: &'static str, trace: &RequestTrace) -> Span {
        self.tracer
            .span_builder(name)
            .with_kind(SpanKind::Internal)
            .start_with_context(&self.tracer, trace.context())
    }
}

impl std::fmt::Debug for Telemetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Telemetry")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}
