pub mod config;
pub mod logging;

pub use config::{build_targets, load_config};
pub use logging::init_logging;
