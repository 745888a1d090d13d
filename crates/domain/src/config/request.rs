use super::errors::ConfigError;
use crate::dns_record::QueryType;
use crate::errors::DomainError;
use crate::response_code::ResponseCode;
use crate::target::Target;
use serde::{Deserialize, Serialize};

/// A single `requests[]` entry of the YAML file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfig {
    #[serde(default)]
    pub domain: String,

    /// Record type to query (default: "A")
    #[serde(default)]
    pub query_type: Option<String>,

    /// Resolver host, queried on port 53. Falls back to the system resolver.
    #[serde(default)]
    pub resolver: Option<String>,

    /// Answers the response must contain, order-insensitive.
    /// `expectedRespone` is accepted for older config files.
    #[serde(default, alias = "expectedRespone")]
    pub expected_response: Vec<String>,

    /// One of NOERROR, NXDOMAIN, SERVFAIL, OTHER
    #[serde(default)]
    pub expected_response_code: Option<String>,

    /// Seconds between two queries
    #[serde(default)]
    pub interval: Option<u64>,
}

impl RequestConfig {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Validates this entry and turns it into a [`Target`].
    pub fn to_target(&self, default_interval_secs: u64) -> Result<Target, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidRequest {
            domain: self.domain.clone(),
            reason,
        };

        let query_type = match self.query_type.as_deref() {
            None | Some("") => QueryType::A,
            Some(name) => QueryType::parse(name),
        };

        let mut target =
            Target::new(&self.domain, query_type).map_err(|e| invalid(e.to_string()))?;

        if let Some(resolver) = self.resolver.as_deref() {
            if resolver.trim().is_empty() {
                return Err(invalid("resolver cannot be an empty string".to_string()));
            }
            target = target.with_resolver(resolver);
        }

        if let Some(code) = self.expected_response_code.as_deref() {
            let code: ResponseCode = code
                .parse()
                .map_err(|e: DomainError| invalid(e.to_string()))?;
            target = target.with_expected_response_code(code);
        }

        let interval = self.interval.unwrap_or(default_interval_secs);
        if interval == 0 {
            return Err(invalid("interval must be greater than 0".to_string()));
        }

        Ok(target
            .with_expected_answers(self.expected_response.clone())
            .with_interval_secs(interval))
    }
}
