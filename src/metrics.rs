//! Prometheus request metrics served on `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;

/// Process-wide middleware handle, cloned into every worker's `App`.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("gametrack")
        .endpoint("/metrics")
        .build()
        .expect("metrics builder")
});
