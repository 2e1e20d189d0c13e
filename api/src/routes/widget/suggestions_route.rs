use axum::response::{IntoResponse, Response};

use crate::core::http::response_envelope::ApiResponse;

/// Handler: GET /suggestions: starter questions for an empty chat.
pub async fn suggestions_route() -> Response {
    ApiResponse::success(glass_rag::SUGGESTIONS).into_response()
}
