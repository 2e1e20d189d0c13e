//! JSON envelope the widget parses for every route:
//! `{"success": true, "data": ...}` or `{"success": false, "error": {...}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Machine-readable, e.g. `BAD_REQUEST`.
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ApiErrorDetail>,
}

/// Points the widget at the offending field, e.g. `question`.
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ApiError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Adds a detail unless both parts are empty.
    pub fn with_detail(mut self, path: Option<&str>, hint: Option<&str>) -> Self {
        if path.is_some() || hint.is_some() {
            self.details.push(ApiErrorDetail {
                path: path.map(str::to_string),
                hint: hint.map(str::to_string),
            });
        }
        self
    }

    pub fn with_status(self, status: StatusCode) -> Response {
        ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(self),
        }
        .with_status(status)
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// `200 OK`.
impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        self.with_status(StatusCode::OK)
    }
}
