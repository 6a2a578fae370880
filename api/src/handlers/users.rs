use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use roster_common::{
    params::UserParams,
    views::{ApiErrorResponse, InfoResponse, User},
};
use tracing::{info, instrument};

use crate::{context::ApiContext, error::ApiError};

/// Get all users from the database.
#[utoipa::path(
    get,
    path = "/users",
    tags = ["users"],
    responses((status = 200, description = "Every stored user", body = Vec<User>))
)]
#[instrument(skip(ctx))]
pub async fn list_users(State(ctx): State<ApiContext>) -> Result<Json<Vec<User>>, ApiError> {
    let users = ctx.db.list().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Get a user from the database by email.
#[utoipa::path(
    get,
    path = "/users/{email}",
    tags = ["users"],
    params(("email" = String, Path, description = "Email address of the user")),
    responses(
        (status = 200, description = "Resolved user", body = User),
        (status = 404, description = "Not found", body = ApiErrorResponse),
    )
)]
#[instrument(skip(ctx))]
pub async fn get_user(
    State(ctx): State<ApiContext>,
    Path(email): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = ctx.db.get(&email).await?;

    Ok(Json(user.into()))
}

/// Replace a user in the database. The record to replace is found by the
/// email carried in the body.
#[utoipa::path(
    put,
    path = "/users",
    tags = ["users"],
    request_body = UserParams,
    responses(
        (status = 200, description = "User replaced", body = InfoResponse),
        (status = 404, description = "Not found", body = ApiErrorResponse),
    )
)]
#[instrument(skip(ctx, body), fields(email = %body.email))]
pub async fn update_user(
    State(ctx): State<ApiContext>,
    Json(body): Json<UserParams>,
) -> Result<Json<InfoResponse>, ApiError> {
    let email = body.email.clone();
    ctx.db.replace(body.into()).await?;

    info!("User modified");
    Ok(Json(InfoResponse::new(format!(
        "User with email {email} modified in database"
    ))))
}

/// Delete a user from the database by email.
#[utoipa::path(
    delete,
    path = "/users/{email}",
    tags = ["users"],
    params(("email" = String, Path, description = "Email address of the user")),
    responses(
        (status = 200, description = "User deleted", body = InfoResponse),
        (status = 404, description = "Not found", body = ApiErrorResponse),
    )
)]
#[instrument(skip(ctx))]
pub async fn delete_user(
    State(ctx): State<ApiContext>,
    Path(email): Path<String>,
) -> Result<Json<InfoResponse>, ApiError> {
    ctx.db.delete(&email).await?;

    info!("User deleted");
    Ok(Json(InfoResponse::new(format!(
        "User with email {email} deleted from database"
    ))))
}

/// Add a new user to the database.
#[utoipa::path(
    post,
    path = "/users",
    tags = ["users"],
    request_body = UserParams,
    responses(
        (status = 201, description = "User created", body = InfoResponse),
        (status = 409, description = "Email already in use", body = ApiErrorResponse),
    )
)]
#[instrument(skip(ctx, body), fields(email = %body.email))]
pub async fn create_user(
    State(ctx): State<ApiContext>,
    Json(body): Json<UserParams>,
) -> Result<(StatusCode, Json<InfoResponse>), ApiError> {
    let created = ctx.db.create(body.into()).await?;

    info!("User created");
    Ok((
        StatusCode::CREATED,
        Json(InfoResponse::new(format!(
            "User with email {} added to database",
            created.email
        ))),
    ))
}
