pub mod registry;

pub use registry::{PrometheusMetrics, RTT_BUCKETS};
