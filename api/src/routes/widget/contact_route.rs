use std::sync::Arc;

use axum::{extract::State, response::{IntoResponse, Response}};

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

/// Handler: GET /contact: phone, WhatsApp, email, address and click-to-contact links.
pub async fn contact_route(State(state): State<Arc<AppState>>) -> Response {
    ApiResponse::success(state.assistant.store().facts.contact_links()).into_response()
}
