//! User service for the CRUD operations exposed over HTTP

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{validate_new_user, User, UserDraft, UserStore};
use crate::domain::DomainError;

/// Records the store starts with when demo seeding is enabled
pub fn demo_users() -> Vec<User> {
    vec![User::new("Alice", "Alice@ntu.ac.uk", "Password123")]
}

/// User service wrapping a store
///
/// Owns the write path: validation on create, then masking, then the store.
#[derive(Debug)]
pub struct UserService<S: UserStore> {
    store: Arc<S>,
}

impl<S: UserStore> UserService<S> {
    /// Create a new user service
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Seed the store with users, masking each one as it is written
    pub async fn seed(&self, users: Vec<User>) -> Result<Vec<User>, DomainError> {
        for user in users {
            self.store.append(user.masked()).await?;
        }

        self.store.list().await
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.store.list().await
    }

    /// Get the user at `index`
    pub async fn get(&self, index: i64) -> Result<User, DomainError> {
        self.store.get(index).await
    }

    /// Validate and append a new user. Returns the new index and the stored user.
    pub async fn create(&self, draft: Option<UserDraft>) -> Result<(usize, User), DomainError> {
        let user = validate_new_user(draft)
            .map_err(|e| DomainError::validation(e.to_string()))?
            .masked();

        let index = self.store.append(user.clone()).await?;
        debug!(index, "User created");

        Ok((index, user))
    }

    /// Overwrite the user at `index`. No field validation is applied.
    pub async fn replace(&self, index: i64, draft: UserDraft) -> Result<User, DomainError> {
        let user = draft.into_user().masked();

        let stored = self.store.replace(index, user).await?;
        debug!(index, "User replaced");

        Ok(stored)
    }

    /// Remove the user at `index` and return the users that remain
    pub async fn delete(&self, index: i64) -> Result<Vec<User>, DomainError> {
        let remaining = self.store.remove(index).await?;
        debug!(index, remaining = remaining.len(), "User deleted");

        Ok(remaining)
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.store.len().await
    }
}
