//! Path extractor for positional user indices

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::ApiError;

/// The `{id}` path segment parsed as a signed index.
///
/// Negative values parse successfully and are rejected later as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIndex(pub i64);

impl<S> FromRequestParts<S> for UserIndex
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        parse_index(&raw)
    }
}

fn parse_index(raw: &str) -> Result<UserIndex, ApiError> {
    raw.parse::<i64>()
        .map(UserIndex)
        .map_err(|_| ApiError::bad_request(format!("User id '{}' is not an integer.", raw)))
}
