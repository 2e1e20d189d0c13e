use axum::{extract::Query, response::{IntoResponse, Response}};
use serde::{Deserialize, Serialize};

use crate::core::http::response_envelope::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct RelatedResponse {
    pub question: String,
    pub related: Vec<&'static str>,
}

/// Handler: GET /related?question=...: up to three follow-ups, random order.
pub async fn related_route(Query(q): Query<RelatedQuery>) -> Response {
    let related = glass_rag::related_questions(&q.question, &mut rand::thread_rng());
    ApiResponse::success(RelatedResponse {
        question: q.question,
        related,
    })
    .into_response()
}
