//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read variables & parse values)
//!     → validation.rs (semantic checks)
//!     → DemoConfig (validated, immutable)
//!     → passed by value into each subsystem at startup
//! ```
//!
//! # Design Decisions
//! - Config is read exactly once, before any request is served
//! - Every field has a default so an empty environment is a valid config
//! - Validation separates parsing (loader) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, load_from_lookup, ConfigError};
pub use schema::DemoConfig;
pub use schema::LatencyConfig;
pub use schema::ListenerConfig;
pub use schema::LogFormat;
pub use schema::LoggingConfig;
pub use schema::ObservabilityConfig;
pub use schema::TimeoutConfig;
