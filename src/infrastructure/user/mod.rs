//! User infrastructure module
//!
//! In-memory user store and the user service used by the HTTP layer.

mod repository;
mod service;

pub use repository::InMemoryUserStore;
pub use service::{demo_users, UserService};
