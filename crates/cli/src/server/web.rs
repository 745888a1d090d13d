use axum::Router;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Time in-flight HTTP requests get once shutdown begins.
pub const HTTP_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Binds the metrics listener on all interfaces.
pub async fn bind_listener(port: u16) -> anyhow::Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!(bind_address = %addr, error = %e, "Failed to bind web server");
        anyhow::anyhow!("failed to bind {}: {}", addr, e)
    })?;

    info!(bind_address = %addr, "Web server listening");
    Ok(listener)
}

/// Serves `router` until `shutdown` is cancelled.
pub fn start_web_server(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
) -> JoinHandle<anyhow::Result<()>> {
    let app = router.layer(TraceLayer::new_for_http());

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.cancelled_owned())
            .await?;
        info!("Web server stopped");
        Ok(())
    })
}
