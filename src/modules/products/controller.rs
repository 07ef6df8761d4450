use anyhow::anyhow;
use axum::{Json, extract::Path, http::StatusCode};
use tillpoint_core::{AppError, ErrorResponse};
use tillpoint_models::{CreateProductDto, Product, ProductId};
use tracing::instrument;

use crate::middleware::session::DbSession;
use crate::modules::products::service::ProductService;
use crate::validator::ValidatedJson;

/// Add a product to the catalogue
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 409, description = "Product code already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(session))]
pub async fn create_product(
    mut session: DbSession,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = ProductService::create_product(&mut session, dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products ordered by ID", body = Vec<Product>)
    ),
    tag = "Products"
)]
#[instrument(skip(session))]
pub async fn get_products(mut session: DbSession) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::get_products(&mut session).await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(session))]
pub async fn get_product(
    mut session: DbSession,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, AppError> {
    ProductService::get_product(&mut session, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(anyhow!("Product not found")))
}

/// Look a product up by barcode
#[utoipa::path(
    get,
    path = "/products/code/{code}",
    params(
        ("code" = String, Path, description = "Product barcode")
    ),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "No product with this code", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(session))]
pub async fn get_product_by_code(
    mut session: DbSession,
    Path(code): Path<String>,
) -> Result<Json<Product>, AppError> {
    ProductService::get_product_by_code(&mut session, &code)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(anyhow!("Product not found")))
}
