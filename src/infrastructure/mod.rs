//! Infrastructure layer - Stores, file sinks and logging setup

pub mod logging;
pub mod request_log;
pub mod user;

pub use request_log::RequestLog;
pub use user::{InMemoryUserStore, UserService};
