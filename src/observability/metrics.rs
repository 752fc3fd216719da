//! Metrics collection and exposition.
//!
//! # Metrics
//! - `employee_proxy_requests_total` (counter): requests by operation, status
//! - `employee_proxy_request_duration_seconds` (histogram): latency by operation
//! - `employee_proxy_upstream_requests_total` (counter): upstream calls by method, status
//!
//! Recording is a no-op until [`init_metrics`] installs the Prometheus recorder.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder with its own HTTP listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled inbound request.
pub fn record_request(operation: &'static str, status: u16, start: Instant) {
    let status = status.to_string();
    counter!(
        "employee_proxy_requests_total",
        "operation" => operation,
        "status" => status
    )
    .increment(1);
    histogram!(
        "employee_proxy_request_duration_seconds",
        "operation" => operation
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record one upstream response.
pub fn record_upstream(method: &'static str, status: u16) {
    counter!(
        "employee_proxy_upstream_requests_total",
        "method" => method,
        "status" => status.to_string()
    )
    .increment(1);
}
