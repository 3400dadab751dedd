use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        domain_users::models::RegisterPayload,
        domain_users::models::UpdatePayload,
        domain_users::models::LoginPayload,
        domain_users::models::UserResponse,
        domain_users::models::RegisterResponse,
        domain_users::models::LoginResponse,
        domain_users::models::MessageResponse,
        domain_users::models::UserEnvelope,
        domain_users::models::UpdatedUserEnvelope,
        domain_users::models::UserListResponse,
        axum_helpers::ErrorBody,
        axum_helpers::ErrorsBody,
    )),
    info(
        title = "Users API",
        version = "0.1.0",
        description = "User management with token-based sessions: register/login/logout plus user CRUD with filtering, sorting, and pagination"
    ),
    tags(
        (name = "auth", description = "Registration, login, and logout"),
        (name = "users", description = "User collection operations")
    )
)]
pub struct ApiDoc;
