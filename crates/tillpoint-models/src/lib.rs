//! # Tillpoint Models
//!
//! Domain models and DTOs for the Tillpoint API.
//!
//! Row types derive `sqlx::FromRow` for MySQL; request DTOs derive
//! `validator::Validate`; everything exposed over HTTP derives
//! `utoipa::ToSchema`.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed ID newtypes
//! - [`users`]: user accounts
//! - [`products`]: catalogue entries
//! - [`transactions`]: sales and their line items

pub mod ids;
pub mod products;
pub mod transactions;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use ids::{ProductId, TransactionId, TransactionItemId, UserId};
pub use products::{CreateProductDto, Product};
pub use transactions::{
    CreateTransactionDto, Transaction, TransactionItem, TransactionItemDto, TransactionWithItems,
    line_total, order_total,
};
pub use users::{CreateUserDto, User};
