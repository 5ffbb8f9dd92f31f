//! OpenAPI documentation
//!
//! [`ApiDoc`] describes every route plus the `ApiKey` header security
//! scheme. The router serves it at `/swagger/v1/swagger.json` with Swagger UI
//! at `/swagger`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::health::{HealthResponse, HealthStatus};
use crate::api::types::ApiErrorResponse;
use crate::api::users::{UserPayload, UserResponse};

pub const OPENAPI_JSON_PATH: &str = "/swagger/v1/swagger.json";
pub const SWAGGER_UI_PATH: &str = "/swagger";

/// Adds the API key header scheme to the generated document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "ApiKey",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-API-Key",
                "Paste your API key here. May also be sent as the `api_key` query parameter.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Users API",
        description = "In-memory user records behind a shared API key."
    ),
    paths(
        crate::api::health::root,
        crate::api::health::health_check,
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::create_user,
        crate::api::users::replace_user,
        crate::api::users::delete_user,
    ),
    components(schemas(
        UserPayload,
        UserResponse,
        ApiErrorResponse,
        HealthResponse,
        HealthStatus
    )),
    tags(
        (name = "users", description = "User records, addressed by position"),
        (name = "health", description = "Public liveness endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_routes_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/",
            "/health",
            "/users/",
            "/users/{id}",
            "/users/add",
            "/users/update/{id}",
            "/users/delete/{id}",
        ] {
            assert!(paths.contains(&expected), "missing path {}", expected);
        }
    }

    #[test]
    fn test_api_key_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("ApiKey"));
        assert!(components.schemas.contains_key("UserResponse"));
        assert!(components.schemas.contains_key("ApiErrorResponse"));
    }

    #[test]
    fn test_document_serializes() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("X-API-Key"));
    }
}
