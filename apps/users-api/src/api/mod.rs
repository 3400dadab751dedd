use axum::Router;
use domain_users::{
    UserService,
    auth_handlers::{AuthState, auth_router},
    handlers,
};

/// Creates the API routes, mounted at the root.
///
/// Both routers share one service over the same repository, so a user
/// registered through `/auth` is visible through `/users` immediately.
pub fn routes(state: &crate::state::AppState) -> Router {
    let service = UserService::new(state.repository.clone());

    let auth_state = AuthState {
        service: service.clone(),
        jwt_auth: state.jwt_auth.clone(),
    };

    Router::new()
        .nest("/auth", auth_router(auth_state))
        .nest("/users", handlers::router(service, state.jwt_auth.clone()))
}
