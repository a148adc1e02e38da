//! Shared response envelope types for API handlers.
//!
//! Every response, success or failure, is wrapped as
//! `{ "success": bool, "message": string, "data": ... }`. Failures add
//! `error` (the underlying detail) and `code`. Use [`envelope`] rather than
//! ad-hoc `serde_json::json!` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard `{ success, message, data }` response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

/// Wrap `data` in the envelope and pair it with `status`.
///
/// `success` is derived from the status class so callers cannot send a
/// 5xx marked as successful.
///
/// # Example
///
/// ```ignore
/// Ok(envelope(StatusCode::OK, "Asset fetched successfully", view))
/// ```
pub fn envelope<T: Serialize>(status: StatusCode, message: impl Into<String>, data: T) -> Response {
    let body = ApiResponse {
        success: status.is_success(),
        message: message.into(),
        data,
    };
    (status, Json(body)).into_response()
}

/// Failure envelope: `data` is `null` unless a partial payload is attached.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<T: Serialize = ()> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub error: String,
    pub code: &'static str,
}

impl ErrorResponse {
    pub fn new(code: &'static str, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: error.into(),
            code,
        }
    }
}

impl<T: Serialize> ErrorResponse<T> {
    /// Attach a payload describing the failed state.
    pub fn with_data<U: Serialize>(self, data: U) -> ErrorResponse<U> {
        ErrorResponse {
            success: false,
            message: self.message,
            data: Some(data),
            error: self.error,
            code: self.code,
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}
