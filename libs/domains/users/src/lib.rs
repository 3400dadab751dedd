//! Users Domain
//!
//! User management with token-based sessions over an in-memory
//! collection.
//!
//! # Features
//!
//! - Register/login/logout with signed bearer tokens
//! - User CRUD with owner-only mutation
//! - Accumulating field validation with human-readable messages
//! - Listing with substring filters, sorting, and pagination
//! - Password hashing with Argon2
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/users, /auth)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, password hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, response envelopes
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{JwtAuth, TokenConfig};
//! use domain_users::{
//!     auth_handlers::{self, AuthState},
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//! let jwt_auth = JwtAuth::new(&TokenConfig::new(
//!     "a-signing-secret-of-at-least-32-chars",
//! ));
//!
//! let users = handlers::router(service.clone(), jwt_auth.clone());
//! let auth = auth_handlers::auth_router(AuthState { service, jwt_auth });
//! ```

pub mod auth_handlers;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{LoginPayload, RegisterPayload, UpdatePayload, User, UserResponse};
pub use query::ListQuery;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
