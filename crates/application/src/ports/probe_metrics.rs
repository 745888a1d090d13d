use dns_verifier_domain::{Observation, Target};

/// Sink for per-target probe results.
///
/// Every series is keyed by (domain, query type), so concurrent workers never
/// write to the same series.
pub trait ProbeMetrics: Send + Sync {
    /// Counts one query attempt, whatever its outcome.
    fn record_attempt(&self, target: &Target);

    /// Publishes latency and verdict of a completed query.
    fn record_observation(&self, target: &Target, observation: &Observation);
}
