use dns_verifier_application::ports::ProbeMetrics;
use dns_verifier_domain::{Observation, Target};
use prometheus::{
    register_counter_vec_with_registry, register_gauge_vec_with_registry,
    register_histogram_vec_with_registry, CounterVec, Encoder, GaugeVec, HistogramVec, Registry,
    TextEncoder,
};
use tracing::{debug, info};

/// Histogram boundaries for query round-trip time, in seconds.
pub const RTT_BUCKETS: [f64; 10] = [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0];

const LABELS: [&str; 2] = ["domain", "qtype"];

/// Process-wide Prometheus registry with the three per-target series.
///
/// Built once at startup and shared behind an `Arc` by every worker and by
/// the HTTP layer. Each (domain, qtype) pair owns its own child series.
pub struct PrometheusMetrics {
    registry: Registry,
    requests_total: CounterVec,
    rtt_seconds: HistogramVec,
    verification_status: GaugeVec,
}

impl PrometheusMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let requests_total = register_counter_vec_with_registry!(
            "dns_verifier_stats_total",
            "Statistics of requests made from DNS verifier",
            &LABELS,
            registry
        )?;

        let rtt_seconds = register_histogram_vec_with_registry!(
            "dns_verifier_rtt_s",
            "Histogram of response times for DNS requests made from DNS verifier",
            &LABELS,
            RTT_BUCKETS.to_vec(),
            registry
        )?;

        let verification_status = register_gauge_vec_with_registry!(
            "dns_verifier_verification_status",
            "Verification Status of a DNS request.",
            &LABELS,
            registry
        )?;

        info!("Metrics setup - scrape /metrics");

        Ok(Self {
            registry,
            requests_total,
            rtt_seconds,
            verification_status,
        })
    }

    /// Text exposition of every registered series.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }
}

impl ProbeMetrics for PrometheusMetrics {
    fn record_attempt(&self, target: &Target) {
        self.requests_total
            .with_label_values(&[target.domain(), target.query_type().as_str()])
            .inc();
    }

    fn record_observation(&self, target: &Target, observation: &Observation) {
        let labels = [target.domain(), target.query_type().as_str()];

        self.rtt_seconds
            .with_label_values(&labels)
            .observe(observation.rtt.as_secs_f64());
        self.verification_status
            .with_label_values(&labels)
            .set(observation.verdict);

        debug!(
            domain = target.domain(),
            qtype = %target.query_type(),
            "Updated prometheus stats"
        );
    }
}
