use axum::http::StatusCode;
use tracing::trace;

/// The process is up and serving HTTP.
pub async fn live() -> StatusCode {
    trace!("Liveness probe");
    StatusCode::OK
}

/// Workers are started before the listener binds, so serving means ready.
pub async fn ready() -> StatusCode {
    trace!("Readiness probe");
    StatusCode::OK
}
