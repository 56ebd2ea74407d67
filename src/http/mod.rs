//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware/correlation.rs (server span, RequestTrace extension)
//!     → handlers.rs (child span, attributes, log line, JSON body)
//!     → middleware/correlation.rs (end span, X-Trace-Id header)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;

pub use middleware::X_TRACE_ID;
pub use server::HttpServer;
