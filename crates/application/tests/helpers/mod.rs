#![allow(dead_code)]

use async_trait::async_trait;
use dns_verifier_application::ports::{Exchange, NameserverProvider, ResolutionClient};
use dns_verifier_domain::dns_response::rcode;
use dns_verifier_domain::{AnswerRecord, DnsQuestion, DomainError, RawResponse};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Stub ResolutionClient
// ============================================================================

/// Answers every question with a fixed RCODE and one A record "127.0.0.1",
/// after a fixed 1 second "round trip".
pub struct StubResolutionClient {
    rcode: u16,
    fail: bool,
    calls: Arc<AtomicU64>,
    last_server: Arc<Mutex<Option<String>>>,
    last_question: Arc<Mutex<Option<DnsQuestion>>>,
}

impl StubResolutionClient {
    pub fn answering(rcode: u16) -> Self {
        Self {
            rcode,
            fail: false,
            calls: Arc::new(AtomicU64::new(0)),
            last_server: Arc::new(Mutex::new(None)),
            last_question: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::answering(rcode::NO_ERROR)
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn last_server(&self) -> Option<String> {
        self.last_server.lock().unwrap().clone()
    }

    pub fn last_question(&self) -> Option<DnsQuestion> {
        self.last_question.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResolutionClient for StubResolutionClient {
    async fn query(&self, question: &DnsQuestion, server: &str) -> Result<Exchange, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        *self.last_server.lock().unwrap() = Some(server.to_string());
        *self.last_question.lock().unwrap() = Some(question.clone());

        if self.fail {
            return Err(DomainError::TransportFailure {
                server: server.to_string(),
                reason: "dummy error message".to_string(),
            });
        }

        let response =
            RawResponse::new(self.rcode).with_answer(AnswerRecord::A(Ipv4Addr::new(127, 0, 0, 1)));
        Ok(Exchange::new(response, Duration::from_secs(1)))
    }
}

// ============================================================================
// Static NameserverProvider
// ============================================================================

pub struct StaticNameservers {
    server: Option<String>,
}

impl StaticNameservers {
    pub fn new(server: &str) -> Self {
        Self {
            server: Some(server.to_string()),
        }
    }

    /// Behaves like a host without a readable resolv.conf.
    pub fn unavailable() -> Self {
        Self { server: None }
    }
}

#[async_trait]
impl NameserverProvider for StaticNameservers {
    async fn default_server(&self) -> Result<String, DomainError> {
        self.server.clone().ok_or_else(|| {
            DomainError::ResolverConfiguration("no nameserver configured".to_string())
        })
    }
}
