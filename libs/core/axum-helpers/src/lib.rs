//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum
//! web applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: signed bearer tokens with an in-memory revocation list
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//! - **[`http`]**: HTTP middleware (security headers)
//! - **[`errors`]**: wire-format error bodies

pub mod auth;
pub mod errors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{
    JwtAuth, JwtClaims, RevocationList, TokenConfig, block_if_authenticated, extract_bearer_token,
    require_auth,
};

// Re-export server types
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};

// Re-export HTTP middleware
pub use http::security_headers;

// Re-export error types
pub use errors::{ErrorBody, ErrorsBody, error_response, errors_response};
