use anyhow::{Context, anyhow};
use tillpoint_core::AppError;
use tillpoint_db::Session;
use tillpoint_models::{CreateProductDto, Product, ProductId};
use tracing::instrument;

const PRODUCT_COLUMNS: &str = "id, code, name, price, created_at";

pub struct ProductService;

impl ProductService {
    #[instrument(skip(session))]
    pub async fn create_product(
        session: &mut Session,
        dto: CreateProductDto,
    ) -> Result<Product, AppError> {
        let result = sqlx::query("INSERT INTO products (code, name, price) VALUES (?, ?, ?)")
            .bind(&dto.code)
            .bind(&dto.name)
            .bind(dto.price)
            .execute(&mut **session)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_unique_violation()
                {
                    return AppError::conflict(anyhow!(
                        "A product with code {} already exists",
                        dto.code
                    ));
                }
                AppError::database(anyhow::Error::new(e).context("Failed to insert product"))
            })?;

        let id = ProductId::new(result.last_insert_id());

        Self::get_product(session, id)
            .await?
            .ok_or_else(|| AppError::internal(anyhow!("Product {} missing after insert", id)))
    }

    #[instrument(skip(session))]
    pub async fn get_products(session: &mut Session) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&mut **session)
        .await
        .context("Failed to fetch products")
        .map_err(AppError::database)?;

        Ok(products)
    }

    /// Returns `None` when no product has this ID.
    #[instrument(skip(session))]
    pub async fn get_product(
        session: &mut Session,
        id: ProductId,
    ) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut **session)
        .await
        .context("Failed to fetch product by ID")
        .map_err(AppError::database)?;

        Ok(product)
    }

    /// Looks a product up by its barcode. Returns `None` when nothing matches.
    #[instrument(skip(session))]
    pub async fn get_product_by_code(
        session: &mut Session,
        code: &str,
    ) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE code = ?"
        ))
        .bind(code)
        .fetch_optional(&mut **session)
        .await
        .context("Failed to fetch product by code")
        .map_err(AppError::database)?;

        Ok(product)
    }
}
