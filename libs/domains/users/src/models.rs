use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// User entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned once at creation
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (case-insensitively unique)
    pub email: String,
    /// Age in years
    pub age: u32,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Create a new user (password must already be hashed)
    pub fn new(name: String, email: String, age: u32, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            age,
            password_hash,
        }
    }
}

/// User response DTO (without password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
        }
    }
}

/// Deserialize a patch-aware field: an explicit JSON `null` becomes
/// `Some(Value::Null)` instead of `None`, so "sent as null" stays
/// distinguishable from "not sent" (which serde's default covers).
fn patch_field<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Registration request body.
///
/// Fields are loosely typed so that wrong-typed input (a numeric name,
/// a string age) reaches the validation engine and comes back as a
/// readable message instead of a serde rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RegisterPayload {
    #[serde(default, deserialize_with = "patch_field")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "patch_field")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "patch_field")]
    #[schema(value_type = Option<u32>)]
    pub age: Option<Value>,
    #[serde(default, deserialize_with = "patch_field")]
    #[schema(value_type = Option<String>)]
    pub password: Option<Value>,
}

/// Update request body. Absent fields keep their prior value; a field
/// sent as `null` is present and fails validation. Password is not
/// updatable.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdatePayload {
    #[serde(default, deserialize_with = "patch_field")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "patch_field")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "patch_field")]
    #[schema(value_type = Option<u32>)]
    pub age: Option<Value>,
}

impl UpdatePayload {
    /// True when the request touches none of the updatable fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}

/// Login request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Response after successful registration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
    pub token: String,
}

/// Response after successful login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Plain message response (logout)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Single-user envelope (GET /users/{id})
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub message: String,
    pub user: UserResponse,
}

/// Updated-user envelope (PUT /users/{id})
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatedUserEnvelope {
    pub message: String,
    #[serde(rename = "updatedUser")]
    pub updated_user: UserResponse,
}

/// Paged listing envelope (GET /users)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub message: String,
    #[serde(rename = "totalUsers")]
    pub total_users: usize,
    pub page: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    pub users: Vec<UserResponse>,
}
