use async_trait::async_trait;
use dns_verifier_application::ports::NameserverProvider;
use dns_verifier_domain::target::with_dns_port;
use dns_verifier_domain::DomainError;
use tokio::fs;
use tracing::debug;

pub const DEFAULT_RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// Reads nameservers from a resolv.conf file.
///
/// The file is read on every call so edits are picked up without a restart.
pub struct ResolvConfReader {
    path: String,
}

impl ResolvConfReader {
    pub fn new() -> Self {
        Self {
            path: DEFAULT_RESOLV_CONF_PATH.to_string(),
        }
    }

    /// Create a reader with a custom file path (useful for testing)
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// `nameserver` entries in file order. Comments start with `#` or `;`.
    pub fn parse_nameservers(content: &str) -> Vec<String> {
        content
            .lines()
            .map(|line| line.split(['#', ';']).next().unwrap_or("").trim())
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                match (fields.next(), fields.next()) {
                    (Some("nameserver"), Some(address)) => Some(address.to_string()),
                    _ => None,
                }
            })
            .collect()
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameserverProvider for ResolvConfReader {
    async fn default_server(&self) -> Result<String, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::ResolverConfiguration(format!("failed to read {}: {}", self.path, e))
        })?;

        let first = Self::parse_nameservers(&content)
            .into_iter()
            .next()
            .ok_or_else(|| {
                DomainError::ResolverConfiguration(format!("no nameserver entry in {}", self.path))
            })?;

        debug!(path = %self.path, nameserver = %first, "Using system nameserver");
        Ok(with_dns_port(&first))
    }
}
