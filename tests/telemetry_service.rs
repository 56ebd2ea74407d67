//! Request-level tests for the telemetry demo service.

use std::collections::HashSet;
use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use guardian_demos::http::server::{telemetry_router, telemetry_routes, with_telemetry_layers};
use guardian_demos::config::LoggingConfig;
use guardian_demos::telemetry::{ANOMALY_ATTRIBUTE, DELAY_ATTRIBUTE};
use guardian_demos::LatencyProfile;
use opentelemetry::trace::Status;
use opentelemetry::Value;
use tower::ServiceExt;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

mod common;

use common::{attribute, default_timeouts, is_trace_id, trace_hex, CapturedLogs, TestTelemetry};

async fn get_path(app: &Router, path: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn trace_header(response: &Response) -> String {
    response
        .headers()
        .get("x-trace-id")
        .expect("X-Trace-Id header missing")
        .to_str()
        .unwrap()
        .to_string()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_is_idempotent() {
    let harness = TestTelemetry::new(LatencyProfile::default());
    let app = telemetry_router(harness.telemetry.clone(), &default_timeouts());

    let mut trace_ids = HashSet::new();
    for _ in 0..5 {
        let response = get_path(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let trace_id = trace_header(&response);
        assert!(is_trace_id(&trace_id), "bad trace id {trace_id}");
        trace_ids.insert(trace_id);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
    }
    assert_eq!(trace_ids.len(), 5, "each request gets its own trace");
}

#[tokio::test]
async fn test_hello_delay_is_consistent_across_body_span_and_log() {
    let logs = CapturedLogs::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(logs.clone()));

    let harness = TestTelemetry::new(LatencyProfile::default());
    let app = telemetry_router(harness.telemetry.clone(), &default_timeouts());

    let start = Instant::now();
    let response = get_path(&app, "/hello").await;
    let elapsed = start.elapsed();

    assert_eq!(response.status(), StatusCode::OK);
    let trace_id = trace_header(&response);
    assert!(is_trace_id(&trace_id));

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["message"], "Telemetry engaged");
    let delay_ms = body["delay_ms"].as_u64().unwrap();
    assert!((10..=200).contains(&delay_ms), "delay {delay_ms} out of range");
    assert!(elapsed.as_millis() as u64 >= delay_ms);

    let spans = harness.span_named("hello-handler");
    assert_eq!(spans.len(), 1);
    assert_eq!(trace_hex(&spans[0]), trace_id);
    assert_eq!(
        attribute(&spans[0], DELAY_ATTRIBUTE),
        Some(Value::I64(delay_ms as i64))
    );

    let info = logs.at_level(Level::INFO);
    let record = info
        .iter()
        .find(|r| r.message.starts_with("Handled /hello"))
        .expect("hello log line missing");
    assert_eq!(record.message, format!("Handled /hello with delay {delay_ms}ms"));
    assert_eq!(record.field("delay_ms"), Some(delay_ms.to_string().as_str()));
    assert_eq!(record.field("trace_id"), Some(trace_id.as_str()));
}

#[tokio::test]
async fn test_fixed_latency_profile_is_honoured() {
    let harness = TestTelemetry::new(LatencyProfile::fixed(25));
    let app = telemetry_router(harness.telemetry.clone(), &default_timeouts());

    let response = get_path(&app, "/hello").await;
    assert_eq!(
        body_string(response).await,
        r#"{"message":"Telemetry engaged","delay_ms":25}"#
    );
}

#[tokio::test]
async fn test_simulate_anomaly_logs_warning() {
    let logs = CapturedLogs::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(logs.clone()));

    let harness = TestTelemetry::new(LatencyProfile::default());
    let app = telemetry_router(harness.telemetry.clone(), &default_timeouts());

    let response = get_path(&app, "/simulate-anomaly").await;
    assert_eq!(response.status(), StatusCode::OK);
    let trace_id = trace_header(&response);
    assert!(is_trace_id(&trace_id));
    assert_eq!(body_string(response).await, r#"{"status":"anomaly-triggered"}"#);

    let warnings = logs.at_level(Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("Anomaly endpoint invoked"));
    assert_eq!(warnings[0].field("trace_id"), Some(trace_id.as_str()));

    let spans = harness.span_named("simulate-anomaly");
    assert_eq!(spans.len(), 1);
    assert_eq!(trace_hex(&spans[0]), trace_id);
    assert_eq!(attribute(&spans[0], ANOMALY_ATTRIBUTE), Some(Value::Bool(true)));
}

#[tokio::test]
async fn test_handler_span_is_child_of_server_span() {
    let harness = TestTelemetry::new(LatencyProfile::fixed(10));
    let app = telemetry_router(harness.telemetry.clone(), &default_timeouts());

    let response = get_path(&app, "/hello").await;
    assert_eq!(response.status(), StatusCode::OK);

    let server = harness.span_named("GET /hello");
    let handler = harness.span_named("hello-handler");
    assert_eq!(server.len(), 1);
    assert_eq!(handler.len(), 1);
    assert_eq!(handler[0].parent_span_id, server[0].span_context.span_id());
    assert_eq!(
        attribute(&server[0], "http.response.status_code"),
        Some(Value::I64(200))
    );
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let harness = TestTelemetry::new(LatencyProfile::default());
    let app = telemetry_router(harness.telemetry.clone(), &default_timeouts());

    for _ in 0..3 {
        let response = get_path(&app, "/does-not-exist").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(is_trace_id(&trace_header(&response)));
    }
    assert!(harness.span_named("hello-handler").is_empty());

    // Unmatched paths do not leak into span names.
    assert_eq!(harness.span_named("GET").len(), 3);
    assert!(harness
        .spans()
        .iter()
        .all(|span| !span.name.contains("does-not-exist")));
}

async fn boom() -> &'static str {
    panic!("simulated handler fault")
}

#[tokio::test]
async fn test_handler_panic_becomes_500_and_closes_span() {
    let harness = TestTelemetry::new(LatencyProfile::default());
    let routes = telemetry_routes().route("/boom", get(boom));
    let app = with_telemetry_layers(routes, harness.telemetry.clone(), &default_timeouts());

    let response = get_path(&app, "/boom").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let trace_id = trace_header(&response);

    let spans = harness.span_named("GET /boom");
    assert_eq!(spans.len(), 1);
    assert_eq!(trace_hex(&spans[0]), trace_id);
    assert!(matches!(spans[0].status, Status::Error { .. }));

    // The service keeps answering after the fault.
    let response = get_path(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_logging_visible_under_default_filter() {
    let logs = CapturedLogs::default();
    let filter = EnvFilter::new(LoggingConfig::default().default_filter);
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::registry().with(filter).with(logs.clone()),
    );

    let harness = TestTelemetry::new(LatencyProfile::default());
    let app = telemetry_router(harness.telemetry.clone(), &default_timeouts());

    let response = get_path(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let trace_id = trace_header(&response);

    let records = logs.at_level(Level::INFO);
    assert!(
        records.iter().any(|r| r.target.starts_with("tower_http")),
        "no tower_http response event in {records:?}"
    );
    let completed = records
        .iter()
        .find(|r| r.message == "Request completed")
        .expect("request completion line missing");
    assert_eq!(completed.field("trace_id"), Some(trace_id.as_str()));
    assert_eq!(completed.field("status"), Some("200"));
}
