use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use tracing::warn;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

/// Handler: GET /health: generation backend snapshot.
///
/// `503` when the backend is down; the assistant still answers from
/// templates in that state.
pub async fn health_route(State(state): State<Arc<AppState>>) -> Response {
    let status = state.health.check(&state.llm_config).await;
    let code = if status.ok {
        StatusCode::OK
    } else {
        warn!(message = %status.message, "generation backend unhealthy");
        StatusCode::SERVICE_UNAVAILABLE
    };
    ApiResponse::success(status).with_status(code)
}
