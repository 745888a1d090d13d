use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, error, instrument};

#[instrument(skip(state), name = "api_get_metrics")]
pub async fn get_metrics(State(state): State<AppState>) -> Response {
    match state.metrics.render() {
        Ok(body) => {
            debug!(bytes = body.len(), "Metrics rendered");
            (
                [(header::CONTENT_TYPE, state.metrics.content_type())],
                body,
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response()
        }
    }
}
