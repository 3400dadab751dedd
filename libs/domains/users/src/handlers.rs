use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use axum_helpers::{JwtAuth, JwtClaims, require_auth};
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{UpdatePayload, UpdatedUserEnvelope, UserEnvelope, UserListResponse};
use crate::query::ListQuery;
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router.
///
/// Listing and single-user reads are public; update and delete require a
/// valid, non-revoked token and ownership of the target record.
pub fn router<R: UserRepository + 'static>(service: UserService<R>, auth: JwtAuth) -> Router {
    let shared_service = Arc::new(service);

    let public = Router::new()
        .route("/", get(list_users))
        .route("/{id}", get(get_user));

    let protected = Router::new()
        .route("/{id}", put(update_user).delete(delete_user))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    public.merge(protected).with_state(shared_service)
}

/// List users with filtering, sorting, and pagination
///
/// GET /users?name=jo&email=example&sortBy=age&page=2&pageSize=5
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Query(query): Query<ListQuery>,
) -> UserResult<Json<UserListResponse>> {
    let page = query.page();
    let page_size = query.page_size;
    let (total_users, users) = service.list_users(&query).await?;

    Ok(Json(UserListResponse {
        message: "All current users found".to_string(),
        total_users,
        page,
        page_size,
        users,
    }))
}

/// Get a user by ID
///
/// GET /users/{id}
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserEnvelope>> {
    let user = service.get_user(&id).await?;

    Ok(Json(UserEnvelope {
        message: "User found".to_string(),
        user,
    }))
}

/// Update a user's name/email/age (owner only)
///
/// PUT /users/{id}
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Extension(claims): Extension<JwtClaims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePayload>,
) -> UserResult<Json<UpdatedUserEnvelope>> {
    let updated_user = service.update_user(&id, &claims.sub, payload).await?;

    Ok(Json(UpdatedUserEnvelope {
        message: "User updated successfully".to_string(),
        updated_user,
    }))
}

/// Delete a user (owner only)
///
/// DELETE /users/{id}
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Extension(claims): Extension<JwtClaims>,
    Path(id): Path<String>,
) -> UserResult<impl IntoResponse> {
    service.delete_user(&id, &claims.sub).await?;
    Ok(StatusCode::NO_CONTENT)
}
