//! Supply-chain demo service: a single signed-image status endpoint.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::config::TimeoutConfig;
use crate::http::{response, server::with_base_layers};

/// Default service name of the supply-chain demo.
pub const SERVICE_NAME: &str = "guardian-supply-chain";

#[derive(Debug, Serialize)]
pub struct IndexBody {
    pub status: &'static str,
    pub message: &'static str,
}

pub fn router(timeouts: &TimeoutConfig) -> Router {
    let routes = Router::new()
        .route("/", get(index))
        .fallback(response::not_found);
    with_base_layers(routes, timeouts)
}

async fn index() -> Json<IndexBody> {
    Json(IndexBody {
        status: "ok",
        message: "Guardians supply chain demo",
    })
}
