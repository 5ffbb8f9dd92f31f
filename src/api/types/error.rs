//! API error types
//!
//! Every error body has the shape `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Message returned for every unexpected failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    #[schema(example = "Invalid or missing API key.")]
    pub error: String,
}

/// Internal failure text carried on a 500 response as an extension.
///
/// Never serialized; the request log middleware writes it to the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDetail(pub String);

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
    detail: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: message.into(),
            },
            detail: None,
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error. `detail` is kept off the response body.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    }

    pub fn message(&self) -> &str {
        &self.response.error
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.response)).into_response();

        if let Some(detail) = self.detail {
            response.extensions_mut().insert(FailureDetail(detail));
        }

        response
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Internal { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.error)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Name is required.");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Name is required.");
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_domain_error_conversion() {
        let api_err: ApiError = DomainError::not_found("No user at index 4").into();
        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.message(), "No user at index 4");

        let api_err: ApiError = DomainError::validation("A valid email is required.").into();
        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.message(), "A valid email is required.");
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let api_err: ApiError = DomainError::internal("lock poisoned at store.rs:42").into();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.message(), INTERNAL_ERROR_MESSAGE);
        assert_eq!(api_err.detail(), Some("lock poisoned at store.rs:42"));

        let json = serde_json::to_string(&api_err.response).unwrap();
        assert_eq!(json, r#"{"error":"Internal server error."}"#);
    }

    #[test]
    fn test_internal_error_response_carries_detail_extension() {
        let response = ApiError::internal("boom").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.extensions().get::<FailureDetail>(),
            Some(&FailureDetail("boom".to_string()))
        );
    }

    #[test]
    fn test_client_error_response_has_no_detail_extension() {
        let response = ApiError::unauthorized("Invalid or missing API key.").into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.extensions().get::<FailureDetail>().is_none());
    }
}
