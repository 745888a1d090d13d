use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Scrape endpoint plus liveness and readiness probes.
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(handlers::get_metrics))
        .route("/live", get(handlers::live))
        .route("/ready", get(handlers::ready))
        .with_state(state)
}
