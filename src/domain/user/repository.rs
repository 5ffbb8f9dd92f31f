//! User store trait
//!
//! Records are addressed by their position in the store. Positions shift when
//! an earlier record is removed, so an index is only meaningful at the time of
//! the request that uses it.

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Ordered, positionally indexed storage for users
#[async_trait]
pub trait UserStore: Send + Sync + Debug {
    /// All users, in insertion order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// The user at `index`; `NotFound` when negative or past the end
    async fn get(&self, index: i64) -> Result<User, DomainError>;

    /// Append a user and return its index
    async fn append(&self, user: User) -> Result<usize, DomainError>;

    /// Overwrite the user at `index` and return the stored value
    async fn replace(&self, index: i64, user: User) -> Result<User, DomainError>;

    /// Remove the user at `index` and return the users that remain
    async fn remove(&self, index: i64) -> Result<Vec<User>, DomainError>;

    /// Number of stored users
    async fn len(&self) -> Result<usize, DomainError>;
}

/// Map a signed request index onto a slot of a store of length `len`
pub(crate) fn position(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|i| *i < len)
}

pub(crate) fn index_not_found(index: i64) -> DomainError {
    DomainError::not_found(format!("No user at index {}", index))
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user store for testing
    #[derive(Debug, Default)]
    pub struct MockUserStore {
        users: Arc<RwLock<Vec<User>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserStore {
        /// Create a new mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::internal("Mock store configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserStore for MockUserStore {
        async fn list(&self) -> Result<Vec<User>, DomainError> {
            self.check_should_fail().await?;
            Ok(self.users.read().await.clone())
        }

        async fn get(&self, index: i64) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            position(index, users.len())
                .and_then(|i| users.get(i).cloned())
                .ok_or_else(|| index_not_found(index))
        }

        async fn append(&self, user: User) -> Result<usize, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            users.push(user);
            Ok(users.len() - 1)
        }

        async fn replace(&self, index: i64, user: User) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            let i = position(index, users.len()).ok_or_else(|| index_not_found(index))?;
            users[i] = user.clone();
            Ok(user)
        }

        async fn remove(&self, index: i64) -> Result<Vec<User>, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            let i = position(index, users.len()).ok_or_else(|| index_not_found(index))?;
            users.remove(i);
            Ok(users.clone())
        }

        async fn len(&self) -> Result<usize, DomainError> {
            self.check_should_fail().await?;
            Ok(self.users.read().await.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_in_bounds() {
        assert_eq!(position(0, 3), Some(0));
        assert_eq!(position(2, 3), Some(2));
    }

    #[test]
    fn test_position_out_of_bounds() {
        assert_eq!(position(3, 3), None);
        assert_eq!(position(-1, 3), None);
        assert_eq!(position(i64::MIN, 3), None);
        assert_eq!(position(0, 0), None);
    }

    #[tokio::test]
    async fn test_mock_store_fails_when_configured() {
        let store = mock::MockUserStore::new();
        store.set_should_fail(true).await;

        let err = store.list().await.unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_mock_store_starts_empty() {
        let store = mock::MockUserStore::new();
        assert_eq!(store.len().await.unwrap(), 0);

        store
            .append(User::new("Bob", "bob@x.com", "Password123"))
            .await
            .unwrap();
        assert_eq!(store.len().await.unwrap(), 1);
    }
}
