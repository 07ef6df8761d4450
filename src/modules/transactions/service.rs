use anyhow::{Context, anyhow};
use tillpoint_core::AppError;
use tillpoint_db::Session;
use tillpoint_models::{
    CreateTransactionDto, Transaction, TransactionId, TransactionItem, TransactionWithItems,
    UserId, order_total,
};
use tracing::{info, instrument};

pub struct TransactionService;

impl TransactionService {
    /// Records a sale.
    ///
    /// Prices are read from the catalogue inside the same database
    /// transaction that writes the header and items, so the stored total
    /// always matches the stored lines.
    #[instrument(skip(session))]
    pub async fn create_transaction(
        session: &mut Session,
        dto: CreateTransactionDto,
    ) -> Result<TransactionWithItems, AppError> {
        let mut tx = session
            .begin()
            .await
            .context("Failed to start transaction")
            .map_err(AppError::database)?;

        let user = sqlx::query_scalar::<_, UserId>("SELECT id FROM users WHERE id = ?")
            .bind(dto.user_id)
            .fetch_optional(&mut *tx)
            .await
            .context("Failed to fetch user")
            .map_err(AppError::database)?;
        if user.is_none() {
            return Err(AppError::not_found(anyhow!("User {} not found", dto.user_id)));
        }

        let mut lines = Vec::with_capacity(dto.items.len());
        for item in &dto.items {
            let unit_price = sqlx::query_scalar::<_, u64>("SELECT price FROM products WHERE id = ?")
                .bind(item.product_id)
                .fetch_optional(&mut *tx)
                .await
                .context("Failed to fetch product price")
                .map_err(AppError::database)?
                .ok_or_else(|| {
                    AppError::not_found(anyhow!("Product {} not found", item.product_id))
                })?;
            lines.push((item.product_id, item.quantity, unit_price));
        }

        let total_amount = order_total(lines.iter().map(|(_, qty, price)| (*price, *qty)))
            .ok_or_else(|| AppError::unprocessable(anyhow!("Transaction total is too large")))?;

        let id = sqlx::query("INSERT INTO transactions (user_id, total_amount) VALUES (?, ?)")
            .bind(dto.user_id)
            .bind(total_amount)
            .execute(&mut *tx)
            .await
            .context("Failed to insert transaction")
            .map_err(AppError::database)?
            .last_insert_id();
        let id = TransactionId::new(id);

        for (product_id, quantity, unit_price) in &lines {
            sqlx::query(
                r#"INSERT INTO transaction_items (transaction_id, product_id, quantity, unit_price)
                   VALUES (?, ?, ?, ?)"#,
            )
            .bind(id)
            .bind(*product_id)
            .bind(*quantity)
            .bind(*unit_price)
            .execute(&mut *tx)
            .await
            .context("Failed to insert transaction item")
            .map_err(AppError::database)?;
        }

        tx.commit()
            .await
            .context("Failed to commit transaction")
            .map_err(AppError::database)?;

        info!(
            transaction_id = %id,
            user_id = %dto.user_id,
            items = lines.len(),
            total_amount,
            "Transaction recorded"
        );

        Self::get_transaction(session, id)
            .await?
            .ok_or_else(|| AppError::internal(anyhow!("Transaction {} missing after insert", id)))
    }

    /// Returns `None` when no transaction has this ID.
    #[instrument(skip(session))]
    pub async fn get_transaction(
        session: &mut Session,
        id: TransactionId,
    ) -> Result<Option<TransactionWithItems>, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"SELECT id, user_id, total_amount, created_at
               FROM transactions
               WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&mut **session)
        .await
        .context("Failed to fetch transaction by ID")
        .map_err(AppError::database)?;

        let Some(transaction) = transaction else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, TransactionItem>(
            r#"SELECT id, transaction_id, product_id, quantity, unit_price
               FROM transaction_items
               WHERE transaction_id = ?
               ORDER BY id"#,
        )
        .bind(id)
        .fetch_all(&mut **session)
        .await
        .context("Failed to fetch transaction items")
        .map_err(AppError::database)?;

        Ok(Some(TransactionWithItems { transaction, items }))
    }
}

