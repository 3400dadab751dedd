use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user. The duplicate-email check and the insert run
    /// in one critical section.
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by ID (exact match on the identifier)
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// All users in insertion order
    async fn list_all(&self) -> UserResult<Vec<User>>;

    /// Replace an existing user record
    async fn update(&self, user: User) -> UserResult<User>;

    /// Delete a user by ID; false if no such user existed
    async fn delete(&self, id: Uuid) -> UserResult<bool>;

    /// Check if an email is taken, optionally excluding one user
    async fn email_exists(&self, email: &str, exclude: Option<Uuid>) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository.
///
/// Backed by a Vec so unsorted listings keep insertion order. Clones
/// share the same underlying collection.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        // Check and insert under the same write lock so two concurrent
        // registrations cannot both pass the uniqueness check.
        let email_exists = users
            .iter()
            .any(|u| u.email.to_lowercase() == user.email.to_lowercase());

        if email_exists {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.push(user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        let user = users
            .iter()
            .find(|u| u.email.to_lowercase() == email.to_lowercase())
            .cloned();
        Ok(user)
    }

    async fn list_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        let Some(index) = users.iter().position(|u| u.id == user.id) else {
            return Err(UserError::UserNotFound);
        };

        // Duplicate check excluding the record being replaced.
        let email_exists = users
            .iter()
            .any(|u| u.id != user.id && u.email.to_lowercase() == user.email.to_lowercase());

        if email_exists {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users[index] = user.clone();

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let mut users = self.users.write().await;

        if let Some(index) = users.iter().position(|u| u.id == id) {
            users.remove(index);
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn email_exists(&self, email: &str, exclude: Option<Uuid>) -> UserResult<bool> {
        let users = self.users.read().await;
        let exists = users
            .iter()
            .any(|u| u.email.to_lowercase() == email.to_lowercase() && Some(u.id) != exclude);
        Ok(exists)
    }
}
