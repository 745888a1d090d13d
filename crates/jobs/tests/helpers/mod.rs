#![allow(dead_code)]

use async_trait::async_trait;
use dns_verifier_application::ports::{
    Exchange, NameserverProvider, ProbeMetrics, ResolutionClient,
};
use dns_verifier_application::use_cases::ProbeTargetUseCase;
use dns_verifier_domain::dns_response::rcode;
use dns_verifier_domain::{AnswerRecord, DnsQuestion, DomainError, Observation, QueryType, RawResponse, Target};
use dns_verifier_jobs::ProbeWorker;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Stub ResolutionClient
// ============================================================================

/// NOERROR with one A record "127.0.0.1" and a 1 second round trip, unless
/// switched to failing.
pub struct StubResolutionClient {
    fail: AtomicBool,
    delay: Option<Duration>,
    calls: AtomicU64,
}

impl StubResolutionClient {
    pub fn answering() -> Self {
        Self {
            fail: AtomicBool::new(false),
            delay: None,
            calls: AtomicU64::new(0),
        }
    }

    pub fn failing() -> Self {
        let stub = Self::answering();
        stub.set_failing(true);
        stub
    }

    /// Holds every query for `delay` before answering, like a slow resolver.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::answering()
        }
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResolutionClient for StubResolutionClient {
    async fn query(&self, _question: &DnsQuestion, server: &str) -> Result<Exchange, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::TransportFailure {
                server: server.to_string(),
                reason: "dummy error message".to_string(),
            });
        }

        let response = RawResponse::new(rcode::NO_ERROR)
            .with_answer(AnswerRecord::A(Ipv4Addr::new(127, 0, 0, 1)));
        Ok(Exchange::new(response, Duration::from_secs(1)))
    }
}

pub struct StaticNameservers;

#[async_trait]
impl NameserverProvider for StaticNameservers {
    async fn default_server(&self) -> Result<String, DomainError> {
        Ok("127.0.0.1:53".to_string())
    }
}

// ============================================================================
// Recording ProbeMetrics
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesRecord {
    pub attempts: u64,
    pub observations: u64,
    pub last_verdict: Option<f64>,
    pub last_rtt: Option<Duration>,
}

#[derive(Default)]
pub struct RecordingMetrics {
    series: Mutex<HashMap<String, SeriesRecord>>,
}

impl RecordingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(&self, domain: &str) -> SeriesRecord {
        self.series
            .lock()
            .unwrap()
            .get(domain)
            .cloned()
            .unwrap_or_default()
    }
}

impl ProbeMetrics for RecordingMetrics {
    fn record_attempt(&self, target: &Target) {
        let mut series = self.series.lock().unwrap();
        series.entry(target.domain().to_string()).or_default().attempts += 1;
    }

    fn record_observation(&self, target: &Target, observation: &Observation) {
        let mut series = self.series.lock().unwrap();
        let record = series.entry(target.domain().to_string()).or_default();
        record.observations += 1;
        record.last_verdict = Some(observation.verdict);
        record.last_rtt = Some(observation.rtt);
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn make_target(domain: &str, interval_secs: u64) -> Arc<Target> {
    Arc::new(
        Target::new(domain, QueryType::A)
            .unwrap()
            .with_expected_answers(vec!["127.0.0.1".to_string()])
            .with_interval_secs(interval_secs),
    )
}

pub fn make_worker(
    domain: &str,
    interval_secs: u64,
    client: Arc<StubResolutionClient>,
    metrics: Arc<RecordingMetrics>,
) -> ProbeWorker {
    let probe = Arc::new(ProbeTargetUseCase::new(client, Arc::new(StaticNameservers)));
    ProbeWorker::new(make_target(domain, interval_secs), probe, metrics)
}
