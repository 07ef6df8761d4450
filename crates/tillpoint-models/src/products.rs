//! Items for sale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::ProductId;

/// A product in the catalogue.
///
/// `price` is in the smallest currency unit (yen, cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: ProductId,
    /// Barcode printed on the product, unique across the catalogue.
    pub code: String,
    pub name: String,
    pub price: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 32, message = "code must be 1 to 32 characters"))]
    #[schema(example = "4901234567894")]
    pub code: String,
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    #[schema(example = "Green tea 500ml")]
    pub name: String,
    #[schema(example = 150)]
    pub price: u64,
}
