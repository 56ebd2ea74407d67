//! Per-request trace context.
//!
//! A [`RequestTrace`] is created by the correlation middleware when a request
//! arrives and travels with the request as an extension. Handlers open their
//! spans as children of it, and the middleware reads the correlation id back
//! out of the same value, so the id returned to the caller is always the one
//! that recorded the request's attributes.

use std::fmt;

use axum::http::{HeaderValue, StatusCode};
use opentelemetry::{
    trace::{Status, TraceContextExt, TraceId},
    Context, KeyValue,
};

/// 128-bit trace identifier as exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CorrelationId(u128);

impl CorrelationId {
    /// Reported when no span was active.
    pub const ZERO: CorrelationId = CorrelationId(0);

    pub fn from_trace_id(trace_id: TraceId) -> Self {
        Self(u128::from_be_bytes(trace_id.to_bytes()))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Header form: 32 lowercase hex characters.
    pub fn to_header_value(&self) -> HeaderValue {
        HeaderValue::try_from(self.to_string()).unwrap_or_else(|_| HeaderValue::from_static(ZERO_HEX))
    }
}

const ZERO_HEX: &str = "00000000000000000000000000000000";

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// The active server span of one request, carried explicitly.
#[derive(Clone)]
pub struct RequestTrace {
    context: Context,
    correlation_id: CorrelationId,
}

impl RequestTrace {
    /// Wrap a context whose active span is the request's server span.
    pub fn new(context: Context) -> Self {
        let span_context = context.span().span_context().clone();
        let correlation_id = if span_context.is_valid() {
            CorrelationId::from_trace_id(span_context.trace_id())
        } else {
            CorrelationId::ZERO
        };
        Self {
            context,
            correlation_id,
        }
    }

    /// A trace with no span; its correlation id is [`CorrelationId::ZERO`].
    pub fn detached() -> Self {
        Self::new(Context::new())
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn correlation_id(&self) -> CorrelationId {
        self.correlation_id
    }

    /// Replace the server span's name.
    ///
    /// Used for requests that matched no route, so that arbitrary paths do
    /// not become span names.
    pub fn rename(&self, name: impl Into<String>) {
        self.context.span().update_name(name.into());
    }

    /// Record the response status and end the server span.
    pub fn finish(&self, status: StatusCode) {
        let span = self.context.span();
        span.set_attribute(KeyValue::new(
            "http.response.status_code",
            i64::from(status.as_u16()),
        ));
        if status.is_server_error() {
            span.set_status(Status::error(format!("request failed with status {status}")));
        }
        span.end();
    }
}

impl fmt::Debug for RequestTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestTrace")
            .field("correlation_id", &self.correlation_id)
            .finish()
    }
}
