//! Request and response types shared by the HTTP handlers

pub mod error;
pub mod json;
pub mod path;

pub use error::{ApiError, ApiErrorResponse, FailureDetail, INTERNAL_ERROR_MESSAGE};
pub use json::Json;
pub use path::UserIndex;
