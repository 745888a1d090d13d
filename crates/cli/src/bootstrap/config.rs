use dns_verifier_domain::{CliOverrides, Config, Target};
use tracing::{info, warn};

/// Loads and validates configuration. Runs before logging is up, so it
/// reports only through its error.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Turns every request entry into a [`Target`], logging the ones skipped.
///
/// Fails when no entry survives validation.
pub fn build_targets(config: &Config) -> anyhow::Result<Vec<Target>> {
    let built = config.build_targets()?;

    for rejected in &built.rejected {
        warn!(error = %rejected, "Skipping invalid request");
    }

    info!(
        app_port = config.app_port,
        log_level = %config.log_level,
        targets = built.targets.len(),
        skipped = built.rejected.len(),
        default_interval_secs = config.default_interval_secs(),
        "Configuration loaded"
    );

    Ok(built.targets)
}
