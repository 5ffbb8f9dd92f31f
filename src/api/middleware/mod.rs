//! API middleware components

pub mod api_key;
pub mod logging;
pub mod panic;

pub use api_key::{api_key_middleware, resolve_secret, ApiKeyGate, FALLBACK_API_KEY};
pub use logging::request_log_middleware;
pub use panic::panic_response;
