//! Prometheus recorder for the service.
//!
//! Store calls go through [`observe_store`]; HTTP traffic is recorded by the
//! shared middleware. Both land in the recorder installed here.

use super::store::StoreError;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::future::Future;
use std::sync::OnceLock;
use std::time::Instant;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Latency buckets in seconds, shared by store and HTTP timings.
const DURATION_BUCKETS: &[f64] = &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];

/// Install the global recorder. Calls after a successful install are no-ops.
pub fn init_metrics() -> Result<(), BuildError> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Suffix("_duration_seconds".to_string()),
            DURATION_BUCKETS,
        )?
        .install_recorder()?;

    let _ = METRICS_HANDLE.set(handle);
    Ok(())
}

/// Render every recorded metric in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

/// Time a store call and count it by outcome.
pub async fn observe_store<T, F>(operation: &'static str, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    let start = Instant::now();
    let result = call.await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(StoreError::InvalidId { .. }) => "invalid_id",
        Err(StoreError::Unavailable(_)) => "unavailable",
        Err(StoreError::Database(_)) => "error",
    };

    counter!(
        "menu_store_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
    histogram!(
        "menu_store_operation_duration_seconds",
        "operation" => operation
    )
    .record(start.elapsed().as_secs_f64());

    result
}
