//! API error mapping.
//!
//! Every store failure surfaces uniformly as HTTP 500 with a generic
//! per-route message; the specific cause is logged for operators and never
//! reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn internal(message: &str, cause: impl std::fmt::Display) -> Self {
        tracing::error!("{}: {}", message, cause);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
