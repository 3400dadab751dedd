use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{RegisterPayload, UpdatePayload, User, UserResponse};
use crate::query::{self, ListQuery};
use crate::repository::UserRepository;
use crate::validation;

/// Service layer for user business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Fold one field's validation outcome into the accumulated error list.
fn collect<T>(result: Result<T, Vec<String>>, errors: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(mut field_errors) => {
            errors.append(&mut field_errors);
            None
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new user.
    ///
    /// All field rules run against the current collection snapshot and
    /// their messages accumulate; the repository re-checks email
    /// uniqueness at insert, so the check and the insert cannot be
    /// interleaved by another registration.
    pub async fn register(&self, payload: RegisterPayload) -> UserResult<UserResponse> {
        let snapshot = self.repository.list_all().await?;

        let mut errors = Vec::new();
        let name = collect(validation::validate_name(payload.name.as_ref()), &mut errors);
        let email = collect(
            validation::validate_email(payload.email.as_ref(), &snapshot, None),
            &mut errors,
        );
        let age = collect(validation::validate_age(payload.age.as_ref()), &mut errors);
        let password = collect(
            validation::validate_password(payload.password.as_ref()),
            &mut errors,
        );

        let (Some(name), Some(email), Some(age), Some(password)) = (name, email, age, password)
        else {
            return Err(UserError::Validation(errors));
        };

        let password_hash = self.hash_password(&password)?;
        let user = User::new(name, email, age, password_hash);

        let created = self.repository.create(user).await?;
        Ok(created.into())
    }

    /// Verify login credentials, returning the matching user.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> UserResult<UserResponse> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::UnknownEmail)?;

        if !self.verify_password(password, &user.password_hash)? {
            return Err(UserError::InvalidPassword);
        }

        Ok(user.into())
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> UserResult<UserResponse> {
        let user = self
            .find_by_id_str(id)
            .await?
            .ok_or(UserError::UserNotFound)?;

        Ok(user.into())
    }

    /// List users with filters, sorting, and pagination.
    ///
    /// Returns the filtered (pre-pagination) total alongside the page
    /// slice. An empty filtered set is an error, not an empty page.
    pub async fn list_users(&self, query: &ListQuery) -> UserResult<(usize, Vec<UserResponse>)> {
        let users = self.repository.list_all().await?;
        let (total, slice) = query::apply(users, query);

        if total == 0 {
            return Err(UserError::NoUsersFound);
        }

        Ok((total, slice.into_iter().map(Into::into).collect()))
    }

    /// Update a user's name/email/age.
    ///
    /// Gate order: unknown id (404), then ownership (403), then the
    /// empty-patch check (422), then field validation (400). Absent
    /// fields keep their prior value; the password hash is always
    /// carried over unchanged.
    pub async fn update_user(
        &self,
        id: &str,
        requester_id: &str,
        payload: UpdatePayload,
    ) -> UserResult<UserResponse> {
        let user = self
            .find_by_id_str(id)
            .await?
            .ok_or(UserError::UserNotFound)?;

        if user.id.to_string() != requester_id {
            return Err(UserError::NotOwner("update"));
        }

        if payload.is_empty() {
            return Err(UserError::NothingToUpdate);
        }

        let snapshot = self.repository.list_all().await?;

        let mut errors = Vec::new();
        let name = payload
            .name
            .as_ref()
            .and_then(|value| collect(validation::validate_name(Some(value)), &mut errors));
        let email = payload.email.as_ref().and_then(|value| {
            collect(
                validation::validate_email(Some(value), &snapshot, Some(user.id)),
                &mut errors,
            )
        });
        let age = payload
            .age
            .as_ref()
            .and_then(|value| collect(validation::validate_age(Some(value)), &mut errors));

        if !errors.is_empty() {
            return Err(UserError::Validation(errors));
        }

        let mut updated = user;
        if let Some(name) = name {
            updated.name = name;
        }
        if let Some(email) = email {
            updated.email = email;
        }
        if let Some(age) = age {
            updated.age = age;
        }

        let updated = self.repository.update(updated).await?;
        Ok(updated.into())
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &str, requester_id: &str) -> UserResult<()> {
        let user = self
            .find_by_id_str(id)
            .await?
            .ok_or(UserError::NothingToDelete)?;

        if user.id.to_string() != requester_id {
            return Err(UserError::NotOwner("delete"));
        }

        if !self.repository.delete(user.id).await? {
            return Err(UserError::NothingToDelete);
        }

        Ok(())
    }

    /// Look up by the raw path segment. Identifiers are opaque: a
    /// segment that is not a well-formed id simply matches no user.
    async fn find_by_id_str(&self, id: &str) -> UserResult<Option<User>> {
        match Uuid::parse_str(id) {
            Ok(uuid) => self.repository.find_by_id(uuid).await,
            Err(_) => Ok(None),
        }
    }

    // Password helpers

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
