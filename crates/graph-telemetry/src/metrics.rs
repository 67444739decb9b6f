//! Prometheus metrics for graph resolution.
//!
//! All metrics follow the naming convention: `depgraph_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // CLOSURE RESOLVER
    // =========================================================================

    /// Total closures resolved
    pub static ref CLOSURES_RESOLVED: Counter = Counter::new(
        "depgraph_closures_resolved_total",
        "Total number of dependency closures resolved"
    ).expect("metric creation failed");

    /// Size of resolved closures
    pub static ref CLOSURE_SIZE: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "depgraph_closure_size_nodes",
            "Number of nodes in each resolved closure"
        ).buckets(exponential_buckets(1.0, 2.0, 12).expect("valid buckets"))
    ).expect("metric creation failed");

    // =========================================================================
    // CONSTRAINT SORTER
    // =========================================================================

    /// Sort calls by outcome
    pub static ref SORTS_PERFORMED: CounterVec = CounterVec::new(
        Opts::new("depgraph_sorts_total", "Total constraint sorts"),
        &["outcome"]  // ok, duplicate_identity, cycle, limit_exceeded
    ).expect("metric creation failed");

    /// Sort duration
    pub static ref SORT_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "depgraph_sort_duration_seconds",
            "Time spent ordering constrained nodes"
        ).buckets(exponential_buckets(0.000_01, 2.0, 15).expect("valid buckets"))
    ).expect("metric creation failed");

    // =========================================================================
    // LISTENER PIPELINE
    // =========================================================================

    /// Listener dispatches by chain and outcome
    pub static ref LISTENER_DISPATCHES: CounterVec = CounterVec::new(
        Opts::new("depgraph_listener_dispatches_total", "Total listener chain dispatches"),
        &["chain", "outcome"]
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(CLOSURES_RESOLVED.clone()),
        Box::new(CLOSURE_SIZE.clone()),
        Box::new(SORTS_PERFORMED.clone()),
        Box::new(SORT_DURATION.clone()),
        Box::new(LISTENER_DISPATCHES.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}
