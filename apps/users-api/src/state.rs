//! Application state management.
//!
//! The shared state handed to the route builders. Cloning is cheap:
//! the repository and the token service both share their interiors
//! through `Arc`.

use axum_helpers::JwtAuth;
use domain_users::InMemoryUserRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// The in-memory user collection (shared by all routers)
    pub repository: InMemoryUserRepository,
    /// Token issuing/verification with the revocation list
    pub jwt_auth: JwtAuth,
}
