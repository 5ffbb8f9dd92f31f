//! Users API
//!
//! A small HTTP service keeping user records in memory:
//! - CRUD over a positionally indexed list
//! - Shared-secret API key on the `/users` routes
//! - Reversible masking of stored passwords
//! - Per-request log lines on the console and in an append-only file

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::middleware::ApiKeyGate;
use api::state::AppState;
use infrastructure::user::{demo_users, InMemoryUserStore, UserService};
use infrastructure::RequestLog;

/// Create the application state, reading the API key from the environment
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let gate = ApiKeyGate::from_env(&config.auth)?;
    create_app_state_with_gate(config, gate).await
}

/// Create the application state with an explicit API key gate
pub async fn create_app_state_with_gate(
    config: &AppConfig,
    gate: ApiKeyGate,
) -> anyhow::Result<AppState> {
    let service = UserService::new(Arc::new(InMemoryUserStore::new()));

    if config.store.seed_demo_user {
        let seed = demo_users();
        info!(users = %serde_json::to_string(&seed)?, "Seeding users");

        let stored = service.seed(seed).await?;
        info!(users = %serde_json::to_string(&stored)?, "Seeded users masked");
    }

    Ok(AppState::new(
        Arc::new(service),
        gate,
        RequestLog::new(&config.request_log.path),
    ))
}
