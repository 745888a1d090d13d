use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query to {server} timed out after {timeout_ms}ms")]
    TransportTimeout { server: String, timeout_ms: u64 },

    #[error("Transport failure talking to {server}: {reason}")]
    TransportFailure { server: String, reason: String },

    #[error("Cannot initialize the local resolver: {0}")]
    ResolverConfiguration(String),

    #[error("{0} is not a supported response code")]
    UnsupportedResponseCode(String),
}

impl DomainError {
    /// Errors that only affect the current tick of a worker.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportFailure { .. }
                | DomainError::InvalidDnsResponse(_)
                | DomainError::ResolverConfiguration(_)
        )
    }
}
