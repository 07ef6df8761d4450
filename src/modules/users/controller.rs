use anyhow::anyhow;
use axum::{
    Json,
    extract::Path,
    http::StatusCode,
};
use tillpoint_core::{AppError, ErrorResponse};
use tillpoint_models::{CreateUserDto, User, UserId};
use tracing::instrument;

use crate::middleware::session::DbSession;
use crate::modules::users::service::UserService;
use crate::validator::ValidatedJson;

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(name = %dto.name))]
pub async fn create_user(
    mut session: DbSession,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = UserService::create_user(&mut session, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(session))]
pub async fn get_user(
    mut session: DbSession,
    Path(id): Path<UserId>,
) -> Result<Json<User>, AppError> {
    UserService::get_user(&mut session, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
}
