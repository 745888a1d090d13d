use dns_verifier_infrastructure::metrics::PrometheusMetrics;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<PrometheusMetrics>,
}

impl AppState {
    pub fn new(metrics: Arc<PrometheusMetrics>) -> Self {
        Self { metrics }
    }
}
