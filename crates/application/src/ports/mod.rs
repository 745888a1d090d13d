pub mod nameserver_provider;
pub mod probe_metrics;
pub mod resolution_client;

pub use nameserver_provider::NameserverProvider;
pub use probe_metrics::ProbeMetrics;
pub use resolution_client::{Exchange, ResolutionClient};
