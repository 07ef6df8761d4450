use anyhow::anyhow;
use axum::{Json, extract::Path, http::StatusCode};
use tillpoint_core::{AppError, ErrorResponse};
use tillpoint_models::{CreateTransactionDto, TransactionId, TransactionWithItems};
use tracing::instrument;

use crate::middleware::session::DbSession;
use crate::modules::transactions::service::TransactionService;
use crate::validator::ValidatedJson;

/// Record a sale
#[utoipa::path(
    post,
    path = "/transactions",
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Transaction recorded", body = TransactionWithItems),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "Unknown user or product", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Transactions"
)]
#[instrument(skip(session))]
pub async fn create_transaction(
    mut session: DbSession,
    ValidatedJson(dto): ValidatedJson<CreateTransactionDto>,
) -> Result<(StatusCode, Json<TransactionWithItems>), AppError> {
    let transaction = TransactionService::create_transaction(&mut session, dto).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Get a transaction with its items
#[utoipa::path(
    get,
    path = "/transactions/{id}",
    params(
        ("id" = u64, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction details", body = TransactionWithItems),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    ),
    tag = "Transactions"
)]
#[instrument(skip(session))]
pub async fn get_transaction(
    mut session: DbSession,
    Path(id): Path<TransactionId>,
) -> Result<Json<TransactionWithItems>, AppError> {
    TransactionService::get_transaction(&mut session, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(anyhow!("Transaction not found")))
}
