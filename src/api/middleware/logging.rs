//! Request logging middleware
//!
//! Emits one line per completed request to the console and the request log
//! file. Responses carrying a [`FailureDetail`] also get an `Exception:` line
//! in the file.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, info};

use crate::api::state::AppState;
use crate::api::types::FailureDetail;
use crate::infrastructure::RequestLog;

/// Middleware recording method, path and final status of every request.
/// Only the path is recorded; the query string may hold the API key.
pub async fn request_log_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    debug!(
        method = %method,
        path = %path,
        headers = %redact_headers(request.headers()),
        "Incoming request"
    );

    let response = next.run(request).await;
    let status = response.status().as_u16();

    if let Some(FailureDetail(detail)) = response.extensions().get::<FailureDetail>() {
        error!(method = %method, path = %path, error = %detail, "Unhandled failure");
        state.request_log.record_exception(detail).await;
    }

    info!(
        method = %method,
        path = %path,
        status,
        duration_ms = %start.elapsed().as_millis(),
        "{}",
        RequestLog::request_line(method.as_str(), &path, status)
    );
    state
        .request_log
        .record_request(method.as_str(), &path, status)
        .await;

    response
}

/// Render loggable headers, masking credentials
fn redact_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .filter(|(name, _)| should_log_header(name.as_str()))
        .map(|(name, value)| {
            let value = if is_sensitive_header(name.as_str()) {
                "[REDACTED]"
            } else {
                value.to_str().unwrap_or("[invalid]")
            };
            format!("{}={}", name, value)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check if a header contains sensitive information
fn is_sensitive_header(name: &str) -> bool {
    matches!(
        name,
        "authorization" | "x-api-key" | "cookie" | "proxy-authorization"
    )
}

/// Check if a header should be logged
fn should_log_header(name: &str) -> bool {
    matches!(
        name,
        "content-type"
            | "content-length"
            | "accept"
            | "user-agent"
            | "x-request-id"
            | "x-forwarded-for"
            | "authorization"
            | "x-api-key"
    )
}
