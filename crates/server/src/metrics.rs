//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the sortbox server:
//! - HTTP request metrics (latency, counts, in-flight)
//! - Upload metrics (requests, rejected requests, skipped files)
//! - Placement counters from the core crate

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "sortbox_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("sortbox_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "sortbox_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Upload Metrics
// =============================================================================

/// Upload requests that were accepted.
pub static UPLOAD_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "sortbox_upload_requests_total",
        "Total accepted upload requests",
    )
    .unwrap()
});

/// Upload requests rejected with 400.
pub static UPLOAD_REQUESTS_REJECTED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "sortbox_upload_requests_rejected_total",
        "Total upload requests rejected for carrying no files",
    )
    .unwrap()
});

/// Uploaded files skipped because their name sanitized to nothing.
pub static UPLOAD_FILES_SKIPPED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "sortbox_upload_files_skipped_total",
        "Total uploaded files skipped for unusable names",
    )
    .unwrap()
});

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Uploads
    registry
        .register(Box::new(UPLOAD_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(UPLOAD_REQUESTS_REJECTED.clone()))
        .unwrap();
    registry
        .register(Box::new(UPLOAD_FILES_SKIPPED.clone()))
        .unwrap();

    // Core metrics (placement)
    for metric in sortbox_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Normalize a path for metric labels.
///
/// The static-page fallback serves arbitrary request paths; collapsing them
/// keeps label cardinality bounded.
pub fn normalize_path(path: &str) -> String {
    match path {
        "/upload" | "/metrics" | "/api/v1/health" | "/api/v1/config" => path.to_string(),
        _ => "/static".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_known_routes() {
        assert_eq!(normalize_path("/upload"), "/upload");
        assert_eq!(normalize_path("/api/v1/health"), "/api/v1/health");
    }

    #[test]
    fn test_normalize_path_collapses_static() {
        assert_eq!(normalize_path("/"), "/static");
        assert_eq!(normalize_path("/index.html"), "/static");
        assert_eq!(normalize_path("/does/not/exist"), "/static");
    }

    #[test]
    fn test_encode_metrics_contains_registered_families() {
        HTTP_REQUESTS_IN_FLIGHT.set(0);
        let text = encode_metrics();
        assert!(text.contains("sortbox_http_requests_in_flight"));
    }
}
