pub mod health;
pub mod metrics;

pub use health::{live, ready};
pub use metrics::get_metrics;
