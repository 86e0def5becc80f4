//! Prometheus metrics for the invoice engine.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram, CounterVec, Histogram, TextEncoder,
};

/// Assembled document counter by mode.
pub static DOCUMENTS_ASSEMBLED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoice_engine_documents_assembled_total",
        "Total number of invoice documents assembled",
        &["mode"] // tax_invoice, bill_of_supply
    )
    .expect("Failed to register documents_assembled_total")
});

/// Emitted page counter by page kind.
pub static PAGES_EMITTED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoice_engine_pages_emitted_total",
        "Total number of page descriptors emitted",
        &["kind"] // primary, annexure
    )
    .expect("Failed to register pages_emitted_total")
});

/// Rejected input counter for alerting.
pub static VALIDATION_ERRORS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoice_engine_validation_errors_total",
        "Total number of rejected invoice inputs by error type",
        &["error_type"]
    )
    .expect("Failed to register validation_errors_total")
});

/// Document assembly duration histogram.
pub static ASSEMBLY_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "invoice_engine_assembly_duration_seconds",
        "Invoice document assembly duration in seconds",
        vec![0.0001, 0.00025, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1]
    )
    .expect("Failed to register assembly_duration")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&DOCUMENTS_ASSEMBLED_TOTAL);
    Lazy::force(&PAGES_EMITTED_TOTAL);
    Lazy::force(&VALIDATION_ERRORS_TOTAL);
    Lazy::force(&ASSEMBLY_DURATION);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
