use axum::{http::StatusCode, middleware, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::doc::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use super::health;
use super::middleware::{api_key_middleware, panic_response, request_log_middleware};
use super::state::AppState;
use super::types::ApiError;
use super::users;

/// Create the full router with application state
///
/// Layers, outermost first: tracing span, request log, panic conversion,
/// API key gate.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Public endpoints
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        // Users API, guarded by the API key middleware below
        .merge(users::create_users_router())
        // Applies to every route registered above
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(state.clone(), api_key_middleware))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(state.clone(), request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback() -> ApiError {
    ApiError::not_found("Not found.")
}

async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
}
