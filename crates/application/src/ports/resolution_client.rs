use async_trait::async_trait;
use dns_verifier_domain::{DnsQuestion, DomainError, RawResponse};
use std::time::Duration;

/// A reply together with the measured round-trip time.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub response: RawResponse,
    pub rtt: Duration,
}

impl Exchange {
    pub fn new(response: RawResponse, rtt: Duration) -> Self {
        Self { response, rtt }
    }
}

/// Sends one question to one resolver and waits for the reply.
///
/// Implementations make a single attempt per call: no retries, no fallback
/// servers. Timeouts, socket failures and undecodable replies are errors.
#[async_trait]
pub trait ResolutionClient: Send + Sync {
    /// `server` is a `host:port` string.
    async fn query(&self, question: &DnsQuestion, server: &str) -> Result<Exchange, DomainError>;
}
