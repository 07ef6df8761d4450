//! Completed sales and their line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{ProductId, TransactionId, TransactionItemId, UserId};

/// Header row of a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    /// Sum of `unit_price * quantity` over all items.
    pub total_amount: u64,
    pub created_at: DateTime<Utc>,
}

/// One product line of a sale.
///
/// `unit_price` is copied from the product when the sale is recorded, so
/// later price changes do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TransactionItem {
    pub id: TransactionItemId,
    pub transaction_id: TransactionId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TransactionWithItems {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub items: Vec<TransactionItem>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTransactionDto {
    pub user_id: UserId,
    #[validate(length(min = 1, message = "at least one item is required"), nested)]
    pub items: Vec<TransactionItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TransactionItemDto {
    pub product_id: ProductId,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    #[schema(example = 1)]
    pub quantity: u32,
}

/// Price of `quantity` units, `None` on overflow.
pub fn line_total(unit_price: u64, quantity: u32) -> Option<u64> {
    unit_price.checked_mul(u64::from(quantity))
}

/// Total of `(unit_price, quantity)` lines, `None` on overflow.
pub fn order_total<I>(lines: I) -> Option<u64>
where
    I: IntoIterator<Item = (u64, u32)>,
{
    lines.into_iter().try_fold(0u64, |total, (unit_price, quantity)| {
        total.checked_add(line_total(unit_price, quantity)?)
    })
}
