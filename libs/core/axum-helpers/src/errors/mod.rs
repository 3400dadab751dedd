//! Wire-format error bodies.
//!
//! Every error response in the API is one of two JSON shapes:
//! a single message `{"error": "..."}`, or an accumulated validation
//! list `{"errors": ["...", ...]}`.

pub mod handlers;

pub use handlers::not_found;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Single-message error body.
///
/// ```json
/// { "error": "Invalid password" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Multi-message body for accumulated validation failures.
///
/// ```json
/// { "errors": ["Validation error: 'name' field is required."] }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

/// Build a `{"error": ...}` response with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(ErrorBody {
        error: message.into(),
    });

    (status, body).into_response()
}

/// Build a `{"errors": [...]}` response with the given status.
pub fn errors_response(status: StatusCode, messages: Vec<String>) -> Response {
    let body = Json(ErrorsBody { errors: messages });

    (status, body).into_response()
}
