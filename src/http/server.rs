//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum routers for each demo service
//! - Wire up middleware (tracing, timeout, panic recovery, correlation)
//! - Serve on a bound listener until shutdown is signalled

use std::future::Future;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, HttpMakeClassifier, TraceLayer},
};
use tracing::Level;

use crate::config::TimeoutConfig;
use crate::http::handlers;
use crate::http::middleware::correlation_middleware;
use crate::http::response;
use crate::telemetry::Telemetry;

/// HTTP server for one demo service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Serve an already-layered router.
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// The telemetry demo service.
    pub fn telemetry(telemetry: Telemetry, timeouts: &TimeoutConfig) -> Self {
        Self::new(telemetry_router(telemetry, timeouts))
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` resolves. In-flight requests are drained.
    ///
    /// The binaries pass [`crate::lifecycle::signals::wait_for_signal`].
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Route table of the telemetry service, before middleware.
pub fn telemetry_routes() -> Router<Telemetry> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/hello", get(handlers::hello))
        .route("/simulate-anomaly", get(handlers::simulate_anomaly))
        .fallback(response::not_found)
}

/// Complete telemetry router: routes plus the middleware stack.
pub fn telemetry_router(telemetry: Telemetry, timeouts: &TimeoutConfig) -> Router {
    with_telemetry_layers(telemetry_routes(), telemetry, timeouts)
}

/// Apply the telemetry middleware stack to a route table.
///
/// Layer order (outermost first): request logging, correlation, timeout,
/// panic recovery. Correlation sits outside timeout and panic recovery so
/// that 408 and 500 responses still carry `X-Trace-Id`.
#[allow(deprecated)]
pub fn with_telemetry_layers(
    routes: Router<Telemetry>,
    telemetry: Telemetry,
    timeouts: &TimeoutConfig,
) -> Router {
    routes
        .with_state(telemetry.clone())
        .layer(CatchPanicLayer::custom(response::panic_response))
        .layer(TimeoutLayer::new(Duration::from_secs(timeouts.request_secs)))
        .layer(middleware::from_fn_with_state(telemetry, correlation_middleware))
        .layer(request_trace_layer())
}

/// Middleware shared by the services that emit no spans.
#[allow(deprecated)]
pub fn with_base_layers(routes: Router, timeouts: &TimeoutConfig) -> Router {
    routes
        .layer(CatchPanicLayer::custom(response::panic_response))
        .layer(TimeoutLayer::new(Duration::from_secs(timeouts.request_secs)))
        .layer(request_trace_layer())
}

/// Request/response logging at INFO, so it shows under the default filter.
pub fn request_trace_layer(
) -> TraceLayer<HttpMakeClassifier, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
