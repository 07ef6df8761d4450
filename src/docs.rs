use utoipa::OpenApi;

use crate::modules::health::{HealthResponse, MessageResponse, SessionStatsResponse};
use tillpoint_core::ErrorResponse;
use tillpoint_models::{
    CreateProductDto, CreateTransactionDto, CreateUserDto, Product, Transaction, TransactionItem,
    TransactionItemDto, TransactionWithItems, User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::root,
        crate::modules::health::controller::health,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_user,
        crate::modules::products::controller::create_product,
        crate::modules::products::controller::get_products,
        crate::modules::products::controller::get_product,
        crate::modules::products::controller::get_product_by_code,
        crate::modules::transactions::controller::create_transaction,
        crate::modules::transactions::controller::get_transaction,
    ),
    components(
        schemas(
            User,
            CreateUserDto,
            Product,
            CreateProductDto,
            Transaction,
            TransactionItem,
            TransactionWithItems,
            CreateTransactionDto,
            TransactionItemDto,
            MessageResponse,
            HealthResponse,
            SessionStatsResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database connectivity"),
        (name = "Users", description = "User endpoints"),
        (name = "Products", description = "Product catalogue endpoints"),
        (name = "Transactions", description = "Sales endpoints")
    ),
    info(
        title = "Tillpoint API",
        version = "0.1.0",
        description = "Point-of-sale backend built with Rust, Axum, and MySQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
