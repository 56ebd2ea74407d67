//! HTTP middleware.

pub mod correlation;

pub use correlation::{correlation_middleware, X_TRACE_ID};
