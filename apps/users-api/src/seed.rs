//! Development seed data.
//!
//! Populates the fresh in-memory collection with a known demo user and
//! a batch of generated users so pagination and sorting have something
//! to chew on. Runs only when `APP_ENV` is development.

use domain_users::{RegisterPayload, UserService};
use serde_json::json;
use tracing::info;

use crate::state::AppState;

const GENERATED_USERS: usize = 50;

pub async fn seed_dev_users(state: &AppState) -> eyre::Result<()> {
    let service = UserService::new(state.repository.clone());

    let dummy = service
        .register(RegisterPayload {
            name: Some(json!("Dummy User")),
            email: Some(json!("dummy@example.com")),
            age: Some(json!(30)),
            password: Some(json!("dummyPassword123")),
        })
        .await?;

    let token = state.jwt_auth.issue(&dummy.id.to_string(), &dummy.email)?;

    info!(
        user_id = %dummy.id,
        email = %dummy.email,
        token = %token,
        "Dummy user created"
    );

    for i in 0..GENERATED_USERS {
        let user = register_generated(&service, i).await?;
        tracing::debug!(user_id = %user.id, email = %user.email, "Seed user created");
    }

    info!(
        "Added {} users for testing pagination and sorting",
        GENERATED_USERS
    );
    Ok(())
}

async fn register_generated(
    service: &UserService<domain_users::InMemoryUserRepository>,
    i: usize,
) -> eyre::Result<domain_users::UserResponse> {
    // Ages spread over 18-67
    let age = 18 + (i * 7) % 50;

    let user = service
        .register(RegisterPayload {
            name: Some(json!(format!("User{}", i + 2))),
            email: Some(json!(format!("user{}@example.com", i + 2))),
            age: Some(json!(age)),
            password: Some(json!(format!("password{}", i + 1))),
        })
        .await?;

    Ok(user)
}
