//! POST /ask: answers one customer question.

use std::sync::Arc;

use axum::{Json, extract::State, response::{IntoResponse, Response}};
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::answer::ask_request::AskRequest,
};

/// Handler: POST /ask
///
/// Each request runs its own pipeline, so visitors never wait on each other.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"How much does a shower door cost?"}'
/// ```
#[instrument(name = "ask_route", skip_all, fields(question_len = body.question.len()))]
pub async fn ask_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> AppResult<Response> {
    let question = body.question.trim();
    if question.is_empty() {
        return Err(AppError::bad_request(
            "question must not be blank",
            Some("question"),
        ));
    }

    let result = state.assistant.process_question(question).await;
    info!(source = ?result.source, confidence = ?result.confidence, "answered");
    Ok(ApiResponse::success(result).into_response())
}
