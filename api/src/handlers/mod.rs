use axum::extract::State;
use tracing::instrument;

use crate::{context::ApiContext, error::ApiError};

pub mod users;

#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses((status = 200, description = "Backing store is reachable", body = String))
)]
#[instrument(skip(ctx))]
pub async fn health_check(State(ctx): State<ApiContext>) -> Result<&'static str, ApiError> {
    ctx.db.ping().await?;
    Ok("Healthy")
}
