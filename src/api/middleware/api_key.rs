//! Shared-secret API key gate
//!
//! Requests whose path falls under the protected prefix must carry the key,
//! either in the configured header or, when the header is absent, in the
//! configured query parameter.

use axum::{
    extract::{Query, Request, State},
    http::{HeaderMap, HeaderName, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::config::AuthConfig;

/// Key accepted when the configured environment variable is unset.
///
/// Insecure: anyone reading the source knows it. Kept so a fresh checkout
/// works without setup; a warning is logged whenever it is in effect.
pub const FALLBACK_API_KEY: &str = "HereComesTheSunAndISayItsAlright";

pub const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing API key.";

/// Pick the expected key: the environment value when set, else the fallback.
pub fn resolve_secret(env_value: Option<String>, env_var: &str) -> String {
    match env_value {
        Some(secret) => secret,
        None => {
            warn!(
                env_var = %env_var,
                "API key environment variable is not set; using the built-in fallback key"
            );
            FALLBACK_API_KEY.to_string()
        }
    }
}

/// API key check for the protected path prefix
#[derive(Debug, Clone)]
pub struct ApiKeyGate {
    header_name: HeaderName,
    query_param: String,
    secret: String,
    protected_prefix: String,
}

impl ApiKeyGate {
    /// Build a gate from configuration with an explicit secret
    pub fn new(config: &AuthConfig, secret: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            header_name: HeaderName::try_from(config.header_name.as_str())?,
            query_param: config.query_param.clone(),
            secret: secret.into(),
            protected_prefix: config.protected_prefix.trim_end_matches('/').to_string(),
        })
    }

    /// Build a gate from configuration, reading the secret from the environment
    pub fn from_env(config: &AuthConfig) -> anyhow::Result<Self> {
        let secret = resolve_secret(
            std::env::var(&config.secret_env_var).ok(),
            &config.secret_env_var,
        );

        Self::new(config, secret)
    }

    /// Whether `path` falls under the protected prefix.
    ///
    /// Matches whole segments only and ignores ASCII case, so `/users` and
    /// `/USERS/1` are protected but `/usersx` is not.
    pub fn protects(&self, path: &str) -> bool {
        let prefix = self.protected_prefix.as_str();

        let head_matches = path
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));

        head_matches
            && path
                .get(prefix.len()..)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }

    /// The key offered by the caller. The header wins whenever it is present,
    /// even if empty; the query parameter is only consulted without it.
    pub fn provided_key(&self, headers: &HeaderMap, uri: &Uri) -> Option<String> {
        if let Some(value) = headers.get(&self.header_name) {
            return Some(value.to_str().unwrap_or_default().to_string());
        }

        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;

        pairs
            .into_iter()
            .find(|(name, _)| *name == self.query_param)
            .map(|(_, value)| value)
    }

    /// Check a request's credentials
    pub fn authorize(&self, headers: &HeaderMap, uri: &Uri) -> Result<(), ApiError> {
        match self.provided_key(headers, uri) {
            Some(key) if !key.trim().is_empty() && key == self.secret => Ok(()),
            _ => Err(ApiError::unauthorized(UNAUTHORIZED_MESSAGE)),
        }
    }
}

/// Middleware rejecting unauthenticated requests under the protected prefix
pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let gate = &state.api_key_gate;

    if !gate.protects(request.uri().path()) {
        return next.run(request).await;
    }

    if let Err(err) = gate.authorize(request.headers(), request.uri()) {
        debug!(path = %request.uri().path(), "Rejected request without a valid API key");
        return err.into_response();
    }

    next.run(request).await
}
