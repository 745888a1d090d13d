use async_trait::async_trait;
use dns_verifier_domain::DomainError;

/// Source of the resolver used by targets without an explicit override.
#[async_trait]
pub trait NameserverProvider: Send + Sync {
    /// First system nameserver as `host:port`.
    async fn default_server(&self) -> Result<String, DomainError>;
}
