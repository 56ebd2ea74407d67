//! Policy demo service.
//!
//! Reports the identity the container runs as, so admission and runtime
//! policies (non-root execution) can be demonstrated.
//!
//! # Routes
//! - `GET /` → HTML status page
//! - `GET /health` → pretty-printed JSON with the security posture
//! - anything else → 404 `Not Found`

pub mod identity;
pub mod page;

pub use identity::ProcessIdentity;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::config::TimeoutConfig;
use crate::http::{response, server::with_base_layers};

/// Default service name of the policy demo.
pub const SERVICE_NAME: &str = "guardian-policy";

/// State injected into the policy handlers.
#[derive(Debug, Clone)]
pub struct PolicyState {
    pub identity: ProcessIdentity,
    pub runtime_version: String,
}

impl PolicyState {
    pub fn new(identity: ProcessIdentity) -> Self {
        Self {
            identity,
            runtime_version: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PolicyHealth {
    pub status: &'static str,
    pub timestamp: String,
    pub guardian: &'static str,
    pub message: &'static str,
    pub security: SecurityPosture,
}

#[derive(Debug, Serialize)]
pub struct SecurityPosture {
    pub user_id: u32,
    pub is_root: bool,
    pub runtime_version: String,
}

/// Local time without offset, microsecond precision.
pub fn local_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Complete policy router with middleware.
pub fn router(state: PolicyState, timeouts: &TimeoutConfig) -> Router {
    let routes = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .fallback(response::not_found)
        .with_state(state);
    with_base_layers(routes, timeouts)
}

async fn index(State(state): State<PolicyState>) -> Html<String> {
    Html(page::render_index(&state.identity, &local_timestamp()))
}

async fn health(State(state): State<PolicyState>) -> Response {
    let body = PolicyHealth {
        status: "healthy",
        timestamp: local_timestamp(),
        guardian: "Star-Lord",
        message: "Policy enforcement active",
        security: SecurityPosture {
            user_id: state.identity.user_id,
            is_root: state.identity.is_root(),
            runtime_version: state.runtime_version.clone(),
        },
    };

    match serde_json::to_string_pretty(&body) {
        Ok(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize health payload");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
