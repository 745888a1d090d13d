use crate::dns_query::DnsQuestion;
use crate::dns_record::QueryType;
use crate::dns_response::RawResponse;
use crate::errors::DomainError;
use crate::response_code::ResponseCode;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Poll interval used when a request does not set one (5 minutes).
pub const DEFAULT_INTERVAL_SECS: u64 = 360;

/// One monitored domain + query type, with its expectations.
///
/// Built once at startup; every field is read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    domain: Arc<str>,
    query_type: QueryType,
    resolver: Option<Arc<str>>,
    expected_answers: Vec<String>,
    expected_response_code: Option<ResponseCode>,
    interval_secs: u64,
}

impl Target {
    pub fn new(domain: &str, query_type: QueryType) -> Result<Self, DomainError> {
        if domain.trim().is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain needs to be a valid domain and not empty string".to_string(),
            ));
        }

        Ok(Self {
            domain: Arc::from(domain),
            query_type,
            resolver: None,
            expected_answers: Vec::new(),
            expected_response_code: None,
            interval_secs: DEFAULT_INTERVAL_SECS,
        })
    }

    pub fn with_resolver(mut self, resolver: impl Into<Arc<str>>) -> Self {
        self.resolver = Some(resolver.into());
        self
    }

    pub fn with_expected_answers(mut self, answers: Vec<String>) -> Self {
        self.expected_answers = answers;
        self
    }

    pub fn with_expected_response_code(mut self, code: ResponseCode) -> Self {
        self.expected_response_code = Some(code);
        self
    }

    pub fn with_interval_secs(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn query_type(&self) -> &QueryType {
        &self.query_type
    }

    pub fn resolver(&self) -> Option<&str> {
        self.resolver.as_deref()
    }

    pub fn expected_answers(&self) -> &[String] {
        &self.expected_answers
    }

    pub fn expected_response_code(&self) -> Option<ResponseCode> {
        self.expected_response_code
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn question(&self) -> DnsQuestion {
        DnsQuestion::new(&self.domain, self.query_type.clone())
    }

    /// `host:53` for the configured resolver override, if any.
    pub fn resolver_override_address(&self) -> Option<String> {
        self.resolver.as_deref().map(with_dns_port)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Domain:<{}> - Query Type:<{}> - interval:<{}>",
            self.domain, self.query_type, self.interval_secs
        )
    }
}

/// Joins a host and the DNS port, bracketing IPv6 literals.
pub fn with_dns_port(host: &str) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, DEFAULT_DNS_PORT)
    } else {
        format!("{}:{}", host, DEFAULT_DNS_PORT)
    }
}

/// Latest completed query for a [`Target`].
///
/// Owned by exactly one worker. A failed query never touches it, so after a
/// transport error it still describes the previous successful tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    pub raw_response: Option<RawResponse>,
    pub response_code: ResponseCode,
    pub answers: Vec<String>,
    pub rtt: Duration,
    /// `1.0` when the last response met every expectation, `0.0` otherwise.
    pub verdict: f64,
}

impl Observation {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first successful query lands.
    pub fn is_empty(&self) -> bool {
        self.raw_response.is_none()
    }

    pub fn passed(&self) -> bool {
        self.verdict >= 1.0
    }
}
