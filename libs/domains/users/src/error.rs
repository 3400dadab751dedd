use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::errors::{error_response, errors_response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    /// One or more field rules failed; messages accumulate in order.
    #[error("validation failed")]
    Validation(Vec<String>),

    /// Duplicate email caught at the storage boundary. Surfaced to the
    /// client as a validation message, not a distinct conflict status.
    #[error("user with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("User not found with this email")]
    UnknownEmail,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Error: User with ID not found.")]
    UserNotFound,

    #[error("Error: No user found to delete.")]
    NothingToDelete,

    #[error("Error: No users found.")]
    NoUsersFound,

    #[error("Unauthorized: You do not have permission to {0} this user.")]
    NotOwner(&'static str),

    #[error("No fields provided to update.")]
    NothingToUpdate,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            UserError::Validation(errors) => errors_response(StatusCode::BAD_REQUEST, errors),
            UserError::DuplicateEmail(_) => errors_response(
                StatusCode::BAD_REQUEST,
                vec!["Validation error: A user with this email already exists.".to_string()],
            ),
            UserError::UnknownEmail => {
                error_response(StatusCode::BAD_REQUEST, "User not found with this email")
            }
            UserError::InvalidPassword => {
                error_response(StatusCode::BAD_REQUEST, "Invalid password")
            }
            UserError::UserNotFound => {
                error_response(StatusCode::NOT_FOUND, "Error: User with ID not found.")
            }
            UserError::NothingToDelete => {
                error_response(StatusCode::NOT_FOUND, "Error: No user found to delete.")
            }
            UserError::NoUsersFound => {
                error_response(StatusCode::NOT_FOUND, "Error: No users found.")
            }
            UserError::NotOwner(action) => error_response(
                StatusCode::FORBIDDEN,
                format!(
                    "Unauthorized: You do not have permission to {} this user.",
                    action
                ),
            ),
            UserError::NothingToUpdate => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "No fields provided to update.",
            ),
            UserError::InvalidToken => error_response(StatusCode::BAD_REQUEST, "Invalid token"),
            UserError::PasswordHash(msg) => {
                tracing::error!("Password hash error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred",
                )
            }
            UserError::Token(msg) => {
                tracing::error!("Token error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred",
                )
            }
        }
    }
}
