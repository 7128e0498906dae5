//! Prometheus metrics for training-service.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, HistogramVec, TextEncoder,
};

/// Recorder behind the `metrics` facade used by the HTTP middleware.
///
/// The recorder is process-global, so it is installed at most once no matter
/// how many routers are built.
static METRICS_HANDLE: Lazy<Option<PrometheusHandle>> = Lazy::new(|| {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
            None
        }
    }
});

/// Database query duration histogram.
pub static DB_QUERY_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "training_db_query_duration_seconds",
        "Database query duration in seconds",
        &["operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("Failed to register db_query_duration")
});

/// Rows inserted, by entity.
pub static ENTITIES_CREATED: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "training_entities_created_total",
        "Total number of rows inserted",
        &["entity"]
    )
    .expect("Failed to register entities_created")
});

/// Rows removed, by entity. Deletes that match nothing do not count.
pub static ENTITIES_DELETED: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "training_entities_deleted_total",
        "Total number of rows deleted",
        &["entity"]
    )
    .expect("Failed to register entities_deleted")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&METRICS_HANDLE);
    Lazy::force(&DB_QUERY_DURATION);
    Lazy::force(&ENTITIES_CREATED);
    Lazy::force(&ENTITIES_DELETED);
}

/// Get metrics in Prometheus text format.
///
/// HTTP request metrics from the recorder come first, followed by the
/// collectors registered with the default `prometheus` registry.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    if let Ok(custom_metrics) = encoder.encode_to_string(&metric_families) {
        output.push_str(&custom_metrics);
    }

    output
}
