//! In-memory user store implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserStore};
use crate::domain::DomainError;

use crate::domain::user::{index_not_found, position};

/// In-memory implementation of UserStore
///
/// Every operation runs under a single lock, so each call is atomic with
/// respect to the others.
#[derive(Debug)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store with initial users, stored as given
    #[cfg(test)]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn get(&self, index: i64) -> Result<User, DomainError> {
        let users = self.users.read().await;

        position(index, users.len())
            .and_then(|i| users.get(i))
            .cloned()
            .ok_or_else(|| index_not_found(index))
    }

    async fn append(&self, user: User) -> Result<usize, DomainError> {
        let mut users = self.users.write().await;
        users.push(user);

        Ok(users.len() - 1)
    }

    async fn replace(&self, index: i64, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let entry = position(index, users.len())
            .and_then(|i| users.get_mut(i))
            .ok_or_else(|| index_not_found(index))?;
        *entry = user;

        Ok(entry.clone())
    }

    async fn remove(&self, index: i64) -> Result<Vec<User>, DomainError> {
        let mut users = self.users.write().await;

        let i = position(index, users.len()).ok_or_else(|| index_not_found(index))?;
        users.remove(i);

        Ok(users.clone())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(self.users.read().await.len())
    }
}
