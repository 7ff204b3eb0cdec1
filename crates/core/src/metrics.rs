//! Prometheus metrics for core components.
//!
//! Placement counters live here next to the code that increments them; the
//! server registers them into its registry via [`all_metrics`].

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts};

/// Files placed into a category folder, by category.
pub static FILES_PLACED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("sortbox_files_placed_total", "Total files placed"),
        &["category"],
    )
    .unwrap()
});

/// Placement moves that failed.
pub static PLACEMENT_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "sortbox_placement_failures_total",
        "Total failed placement moves",
    )
    .unwrap()
});

/// All core metrics, for registration into the server registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(FILES_PLACED.clone()),
        Box::new(PLACEMENT_FAILURES.clone()),
    ]
}
