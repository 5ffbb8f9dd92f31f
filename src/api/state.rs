//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{User, UserDraft, UserStore};
use crate::domain::DomainError;
use crate::infrastructure::user::UserService;
use crate::infrastructure::RequestLog;

use super::middleware::ApiKeyGate;

/// Application state shared by handlers and middleware
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub api_key_gate: Arc<ApiKeyGate>,
    pub request_log: Arc<RequestLog>,
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        api_key_gate: ApiKeyGate,
        request_log: RequestLog,
    ) -> Self {
        Self {
            user_service,
            api_key_gate: Arc::new(api_key_gate),
            request_log: Arc::new(request_log),
        }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get(&self, index: i64) -> Result<User, DomainError>;
    async fn create(&self, draft: Option<UserDraft>) -> Result<(usize, User), DomainError>;
    async fn replace(&self, index: i64, draft: UserDraft) -> Result<User, DomainError>;
    async fn delete(&self, index: i64) -> Result<Vec<User>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<S: UserStore + 'static> UserServiceTrait for UserService<S> {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn get(&self, index: i64) -> Result<User, DomainError> {
        UserService::get(self, index).await
    }

    async fn create(&self, draft: Option<UserDraft>) -> Result<(usize, User), DomainError> {
        UserService::create(self, draft).await
    }

    async fn replace(&self, index: i64, draft: UserDraft) -> Result<User, DomainError> {
        UserService::replace(self, index, draft).await
    }

    async fn delete(&self, index: i64) -> Result<Vec<User>, DomainError> {
        UserService::delete(self, index).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }
}
