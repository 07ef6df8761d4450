use anyhow::Context;
use axum::{Json, extract::State};
use tillpoint_core::{AppError, ErrorResponse};
use tracing::instrument;

use crate::middleware::session::DbSession;
use crate::modules::health::model::{HealthResponse, MessageResponse, SessionStatsResponse};
use crate::state::AppState;

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = MessageResponse)
    ),
    tag = "Health"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Tillpoint POS API".to_string(),
    })
}

/// Check database connectivity
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unavailable", body = ErrorResponse)
    ),
    tag = "Health"
)]
#[instrument(skip_all)]
pub async fn health(
    State(state): State<AppState>,
    mut session: DbSession,
) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("SELECT 1")
        .execute(&mut **session)
        .await
        .context("Database ping failed")
        .map_err(AppError::service_unavailable)?;

    let stats = state.sessions.stats();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        database: "ok".to_string(),
        sessions: SessionStatsResponse {
            acquired: stats.acquired,
            released: stats.released,
            in_use: stats.in_use(),
            pool_size: state.sessions.pool_size(),
            idle_connections: state.sessions.idle_connections(),
        },
    }))
}
