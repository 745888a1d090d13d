use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Maps a configured verbosity to a tracing level. Unknown names fall back
/// to INFO.
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init_logging(level: &str) {
    let max_level = parse_level(level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(max_level.as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_env_filter(filter)
        .with_ansi(true)
        .init();

    info!(configured = level, effective = %max_level, "Logging initialized");
}
