//! User CRUD endpoints
//!
//! Users are addressed by their current position in the list. All routes
//! here sit under the protected prefix and require the API key.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiErrorResponse, Json, UserIndex};
use crate::domain::user::{User, UserDraft};

/// User fields accepted by create and replace
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserPayload {
    #[serde(default)]
    #[schema(example = "Bob")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "bob@x.com")]
    pub email: Option<String>,
    /// Plain password; at least 8 characters on create
    #[serde(default)]
    #[schema(example = "Password123")]
    pub password: Option<String>,
}

impl From<UserPayload> for UserDraft {
    fn from(payload: UserPayload) -> Self {
        Self {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        }
    }
}

/// User as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "Bob")]
    pub name: String,
    #[schema(example = "bob@x.com")]
    pub email: String,
    /// Base64-masked password
    #[schema(example = "UGFzc3dvcmQxMjM=")]
    pub password: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            email: user.email().to_string(),
            password: user.password().to_string(),
        }
    }
}

pub const BODY_NOT_OBJECT_MESSAGE: &str = "Request body must be a JSON object.";

/// Read a user body. `null` is no payload; anything else must be an object.
fn parse_payload(body: Value) -> Result<Option<UserPayload>, ApiError> {
    match body {
        Value::Null => Ok(None),
        Value::Object(_) => serde_json::from_value(body)
            .map(Some)
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON data: {}", e))),
        _ => Err(ApiError::bad_request(BODY_NOT_OBJECT_MESSAGE)),
    }
}

fn to_responses(users: &[User]) -> Vec<UserResponse> {
    users.iter().map(UserResponse::from).collect()
}

/// Create users router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/", get(list_users))
        .route("/users/add", post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/users/update/{id}", put(replace_user))
        .route("/users/delete/{id}", delete(delete_user))
}

/// GET /users/
#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    responses(
        (status = 200, description = "All users in order", body = Vec<UserResponse>),
        (status = 401, description = "Missing or invalid API key", body = ApiErrorResponse)
    ),
    security(("ApiKey" = []))
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await?;

    Ok(Json(to_responses(&users)))
}

/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "Current position of the user in the list")),
    responses(
        (status = 200, description = "User at the position", body = UserResponse),
        (status = 400, description = "Id is not an integer", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ApiErrorResponse),
        (status = 404, description = "No user at the position", body = ApiErrorResponse)
    ),
    security(("ApiKey" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserIndex(index): UserIndex,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(index, "Getting user");

    let user = state.user_service.get(index).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /users/add
#[utoipa::path(
    post,
    path = "/users/add",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse,
            headers(("Location" = String, description = "Path of the new user"))),
        (status = 400, description = "Validation failed or body is not a JSON object",
            body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ApiErrorResponse)
    ),
    security(("ApiKey" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    debug!("Creating user");

    let payload = parse_payload(body)?;
    let (index, user) = state
        .user_service
        .create(payload.map(UserDraft::from))
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{}", index))],
        Json(UserResponse::from(&user)),
    )
        .into_response())
}

/// PUT /users/update/{id}
#[utoipa::path(
    put,
    path = "/users/update/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "Current position of the user in the list")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User replaced; fields are not validated",
            body = UserResponse),
        (status = 400, description = "Id is not an integer or body is not a JSON object",
            body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ApiErrorResponse),
        (status = 404, description = "No user at the position", body = ApiErrorResponse)
    ),
    security(("ApiKey" = []))
)]
pub async fn replace_user(
    State(state): State<AppState>,
    UserIndex(index): UserIndex,
    Json(body): Json<Value>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(index, "Replacing user");

    let payload =
        parse_payload(body)?.ok_or_else(|| ApiError::bad_request(BODY_NOT_OBJECT_MESSAGE))?;

    let user = state.user_service.replace(index, payload.into()).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/delete/{id}
#[utoipa::path(
    delete,
    path = "/users/delete/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "Current position of the user in the list")),
    responses(
        (status = 200, description = "User removed; remaining users in order",
            body = Vec<UserResponse>),
        (status = 400, description = "Id is not an integer", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ApiErrorResponse),
        (status = 404, description = "No user at the position", body = ApiErrorResponse)
    ),
    security(("ApiKey" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserIndex(index): UserIndex,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!(index, "Deleting user");

    let remaining = state.user_service.delete(index).await?;

    Ok(Json(to_responses(&remaining)))
}
