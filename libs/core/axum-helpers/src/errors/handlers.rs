use axum::{http::StatusCode, response::Response};

use super::error_response;

/// Handler for 404 Not Found errors.
///
/// Used as the router-level fallback for unknown paths.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
