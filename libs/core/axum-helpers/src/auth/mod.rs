//! Authentication and authorization module.
//!
//! This module provides:
//! - Signed bearer token creation and verification (HS256)
//! - An in-memory revocation list for logged-out tokens
//! - Middleware gates for protected and unauthenticated-only routes
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, TokenConfig, require_auth};
//! use core_config::FromEnv;
//!
//! let config = TokenConfig::from_env()?;
//! let auth = JwtAuth::new(&config);
//!
//! let protected = Router::new()
//!     .route("/users/{id}", put(handler))
//!     .route_layer(axum::middleware::from_fn_with_state(auth, require_auth));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod store;

// Re-export commonly used types
pub use config::TokenConfig;
pub use jwt::{JwtAuth, JwtClaims};
pub use middleware::{block_if_authenticated, extract_bearer_token, require_auth};
pub use store::RevocationList;
