use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use glass_rag::AssistantError;
use llm_service::{AiLlmError, OllamaError};
use thiserror::Error;

use crate::core::http::response_envelope::ApiError;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Llm(#[from] AiLlmError),

    #[error(transparent)]
    Ollama(#[from] OllamaError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {message}")]
    BadRequest {
        message: String,
        path: Option<&'static str>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, path: Option<&'static str>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            path,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,

            // 5xx, startup-only
            AppError::Llm(_)
            | AppError::Ollama(_)
            | AppError::Assistant(_)
            | AppError::Bind(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Llm(_) | AppError::Ollama(_) => "LLM_CONFIG_ERROR",
            AppError::Assistant(_) => "ASSISTANT_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest { .. } => "BAD_REQUEST",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let path = match &self {
            AppError::BadRequest { path, .. } => *path,
            _ => None,
        };
        ApiError::new(self.error_code(), self.to_string())
            .with_detail(path, None)
            .with_status(self.status_code())
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_map_to_client_statuses() {
        assert_eq!(
            AppError::bad_request("x", None).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::bad_request("x", None).error_code(),
            "BAD_REQUEST"
        );
    }
}
