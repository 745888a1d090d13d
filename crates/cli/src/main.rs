//! # DNS Verifier
//!
//! Probes configured domains on a schedule and exposes the outcome as
//! Prometheus metrics.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use dns_verifier_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "dns-verifier")]
#[command(version)]
#[command(about = "Periodically verifies DNS answers and exports them as Prometheus metrics")]
struct Cli {
    /// Path to config.yaml (default: ./config.yaml, then /etc/dns-verifier/config.yaml)
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP port for /metrics, /live and /ready
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            app_port: cli.port,
            log_level: cli.log_level,
        },
    )?;
    bootstrap::init_logging(&config.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = option_env!("GIT_COMMIT_HASH").unwrap_or("unknown"),
        "DNS verifier starting"
    );

    let targets = bootstrap::build_targets(&config)?;
    let services = di::Services::new()?;

    let mut supervisor = services.build_supervisor(targets);
    supervisor.start();

    let listener = server::bind_listener(config.app_port).await?;
    let shutdown = CancellationToken::new();
    let mut web = server::start_web_server(
        listener,
        dns_verifier_api::create_routes(services.app_state()),
        shutdown.clone(),
    );

    let mut web_failure = None;
    let mut web_exited = false;
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received SIGINT, initiating shutdown");
        }
        _ = wait_for_sigterm() => {
            info!("Received SIGTERM, initiating shutdown");
        }
        result = &mut web => {
            web_exited = true;
            match result {
                Ok(Ok(())) => warn!("Web server exited unexpectedly"),
                Ok(Err(e)) => {
                    error!(error = %e, "Web server failed");
                    web_failure = Some(e);
                }
                Err(e) => {
                    error!(error = %e, "Web server task panicked");
                    web_failure = Some(e.into());
                }
            }
        }
    }

    supervisor.stop().await;

    shutdown.cancel();
    if !web_exited && tokio::time::timeout(server::HTTP_SHUTDOWN_GRACE, web).await.is_err() {
        warn!(
            grace_secs = server::HTTP_SHUTDOWN_GRACE.as_secs(),
            "Web server did not drain in time"
        );
    }

    if let Some(e) = web_failure {
        return Err(e);
    }

    info!("Shutdown complete");
    Ok(())
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!(error = %e, "Failed to register SIGTERM handler");
            std::future::pending::<()>().await
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "dns-verifier",
            "--config",
            "/tmp/config.yaml",
            "--port",
            "9000",
            "--log-level",
            "INFO",
        ])
        .unwrap();

        assert_eq!(cli.config.as_deref(), Some("/tmp/config.yaml"));
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.log_level.as_deref(), Some("INFO"));
    }

    #[test]
    fn test_cli_flags_are_optional() {
        let cli = Cli::try_parse_from(["dns-verifier"]).unwrap();

        assert!(cli.config.is_none());
        assert!(cli.port.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_cli_rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["dns-verifier", "--port", "web"]).is_err());
    }
}
