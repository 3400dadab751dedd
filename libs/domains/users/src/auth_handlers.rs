use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware,
    response::IntoResponse,
    routing::post,
};
use axum_helpers::{JwtAuth, block_if_authenticated, extract_bearer_token, require_auth};

use crate::error::{UserError, UserResult};
use crate::models::{
    LoginPayload, LoginResponse, MessageResponse, RegisterPayload, RegisterResponse,
};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Application state for auth handlers
pub struct AuthState<R: UserRepository> {
    pub service: UserService<R>,
    pub jwt_auth: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            jwt_auth: self.jwt_auth.clone(),
        }
    }
}

/// Create the auth router.
///
/// Register and login are for unauthenticated callers only; a request
/// arriving with a valid token is refused. Logout requires a valid,
/// non-revoked token and revokes it.
pub fn auth_router<R: UserRepository + 'static>(state: AuthState<R>) -> Router {
    let unauthenticated_only = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_auth.clone(),
            block_if_authenticated,
        ));

    let protected = Router::new()
        .route("/logout", post(logout))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_auth.clone(),
            require_auth,
        ));

    unauthenticated_only.merge(protected).with_state(state)
}

/// Register a new user
///
/// POST /auth/register
async fn register<R: UserRepository>(
    State(state): State<AuthState<R>>,
    Json(payload): Json<RegisterPayload>,
) -> UserResult<impl IntoResponse> {
    let user = state.service.register(payload).await?;

    let token = state
        .jwt_auth
        .issue(&user.id.to_string(), &user.email)
        .map_err(|e| UserError::Token(format!("failed to issue token: {e}")))?;

    tracing::info!(user_id = %user.id, email = %user.email, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user,
            token,
        }),
    ))
}

/// Login with email/password
///
/// POST /auth/login
async fn login<R: UserRepository>(
    State(state): State<AuthState<R>>,
    Json(payload): Json<LoginPayload>,
) -> UserResult<Json<LoginResponse>> {
    let user = state
        .service
        .verify_credentials(&payload.email, &payload.password)
        .await?;

    let token = state
        .jwt_auth
        .issue(&user.id.to_string(), &user.email)
        .map_err(|e| UserError::Token(format!("failed to issue token: {e}")))?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// Logout: revoke the presented token
///
/// POST /auth/logout
async fn logout<R: UserRepository>(
    State(state): State<AuthState<R>>,
    headers: HeaderMap,
) -> UserResult<Json<MessageResponse>> {
    // The middleware already vetted the token; re-read the literal
    // string from the header so the revocation entry matches exactly.
    let token = extract_bearer_token(&headers).ok_or(UserError::InvalidToken)?;

    state.jwt_auth.revoke(&token).await;
    tracing::info!("User logged out, token revoked");

    Ok(Json(MessageResponse {
        message: "Logout successful".to_string(),
    }))
}
