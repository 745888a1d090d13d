use crate::dns_record::QueryType;
use std::sync::Arc;

/// Question section of an outgoing query (name + type + RD flag).
/// Uses `Arc<str>` so the same name can be shared across ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: Arc<str>,
    pub query_type: QueryType,
    pub recursion_desired: bool,
}

impl DnsQuestion {
    /// Recursive question for `domain`, made fully qualified.
    pub fn new(domain: &str, query_type: QueryType) -> Self {
        Self {
            name: Arc::from(fqdn(domain)),
            query_type,
            recursion_desired: true,
        }
    }
}

/// Appends the root label unless `domain` already ends with one.
pub fn fqdn(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{}.", domain)
    }
}
