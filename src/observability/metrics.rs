//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by method, status
//! - `gateway_request_duration_seconds` (histogram): latency distribution
//! - `gateway_minimal_mode` (gauge): 1 = fallback application bound

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::bootstrap::Mode;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record which serving mode the process committed to.
pub fn record_mode(mode: Mode) {
    let minimal = match mode {
        Mode::Full => 0.0,
        Mode::Minimal => 1.0,
    };
    gauge!("gateway_minimal_mode").set(minimal);
}

/// Middleware recording per-request counters and latency.
pub async fn track_request(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    counter!(
        "gateway_requests_total",
        "method" => method.clone(),
        "status" => status
    )
    .increment(1);
    histogram!("gateway_request_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());

    response
}
