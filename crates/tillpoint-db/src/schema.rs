//! Database and table creation.
//!
//! Every statement here is idempotent. Startup runs [`ensure_database`] and
//! then [`init_schema`]; both can run against an already initialized server
//! without changing anything.

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, Executor};
use tillpoint_config::DatabaseConfig;
use tracing::{debug, info, instrument, warn};

use crate::error::DbError;
use crate::options::server_connect_options;
use crate::session::{Session, SessionFactory};

/// A table owned by the application.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub ddl: &'static str,
}

/// All tables, parents before children.
pub const TABLES: &[Table] = &[
    Table {
        name: "users",
        ddl: r#"CREATE TABLE IF NOT EXISTS users (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(255) NOT NULL,
            created_at TIMESTAMP(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
            PRIMARY KEY (id),
            UNIQUE KEY uq_users_email (email)
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"#,
    },
    Table {
        name: "products",
        ddl: r#"CREATE TABLE IF NOT EXISTS products (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
            code VARCHAR(32) NOT NULL,
            name VARCHAR(100) NOT NULL,
            price BIGINT UNSIGNED NOT NULL,
            created_at TIMESTAMP(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
            PRIMARY KEY (id),
            UNIQUE KEY uq_products_code (code)
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"#,
    },
    Table {
        name: "transactions",
        ddl: r#"CREATE TABLE IF NOT EXISTS transactions (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
            user_id BIGINT UNSIGNED NOT NULL,
            total_amount BIGINT UNSIGNED NOT NULL,
            created_at TIMESTAMP(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
            PRIMARY KEY (id),
            KEY idx_transactions_user (user_id),
            CONSTRAINT fk_transactions_user FOREIGN KEY (user_id) REFERENCES users (id)
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"#,
    },
    Table {
        name: "transaction_items",
        ddl: r#"CREATE TABLE IF NOT EXISTS transaction_items (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
            transaction_id BIGINT UNSIGNED NOT NULL,
            product_id BIGINT UNSIGNED NOT NULL,
            quantity INT UNSIGNED NOT NULL,
            unit_price BIGINT UNSIGNED NOT NULL,
            PRIMARY KEY (id),
            KEY idx_transaction_items_transaction (transaction_id),
            CONSTRAINT fk_transaction_items_transaction
                FOREIGN KEY (transaction_id) REFERENCES transactions (id),
            CONSTRAINT fk_transaction_items_product
                FOREIGN KEY (product_id) REFERENCES products (id)
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"#,
    },
];

/// Creates the configured database on the server if it does not exist.
///
/// Returns `true` when the database was created by this call.
#[instrument(skip_all, fields(database = %config.name))]
pub async fn ensure_database(config: &DatabaseConfig) -> Result<bool, DbError> {
    let options = server_connect_options(config)?;
    ensure_database_with(&options, &config.name).await
}

/// Like [`ensure_database`], connecting with the given driver options.
pub async fn ensure_database_with(
    options: &MySqlConnectOptions,
    name: &str,
) -> Result<bool, DbError> {
    let mut conn = MySqlConnection::connect_with(options)
        .await
        .map_err(DbError::Connectivity)?;

    let result = create_database_if_missing(&mut conn, name).await;

    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close setup connection cleanly");
    }

    let created = result.map_err(|source| DbError::CreateDatabase {
        database: name.to_string(),
        source,
    })?;

    if created {
        info!(database = name, "Created database");
    } else {
        debug!(database = name, "Database already exists");
    }

    Ok(created)
}

async fn create_database_if_missing(
    conn: &mut MySqlConnection,
    name: &str,
) -> Result<bool, sqlx::Error> {
    let exists: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM information_schema.schemata WHERE schema_name = ?",
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;

    if exists > 0 {
        return Ok(false);
    }

    // Identifiers cannot be bound as parameters.
    let statement = format!(
        "CREATE DATABASE IF NOT EXISTS {} CHARACTER SET utf8mb4",
        quote_identifier(name)
    );
    conn.execute(statement.as_str()).await?;

    Ok(true)
}

/// Backtick-quotes a MySQL identifier.
fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Creates every missing application table.
///
/// Existing tables are left untouched. A failure aborts with the name of the
/// table that could not be created.
#[instrument(skip_all)]
pub async fn init_schema(sessions: &SessionFactory) -> Result<(), DbError> {
    sessions
        .scope(|mut session| async move {
            for table in TABLES {
                sqlx::query(table.ddl)
                    .execute(&mut *session)
                    .await
                    .map_err(|source| DbError::Schema {
                        table: table.name,
                        source,
                    })?;
                debug!(table = table.name, "Table ready");
            }
            Ok::<_, DbError>(())
        })
        .await?;

    info!(tables = TABLES.len(), "Database schema initialized");
    Ok(())
}

/// Names of the base tables in the session's current database, sorted.
pub async fn list_tables(session: &mut Session) -> Result<Vec<String>, DbError> {
    let tables = sqlx::query_scalar::<_, String>(
        r#"SELECT CAST(table_name AS CHAR) FROM information_schema.tables
           WHERE table_schema = DATABASE() AND table_type = 'BASE TABLE'
           ORDER BY table_name"#,
    )
    .fetch_all(&mut **session)
    .await?;

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("pos"), "`pos`");
        assert_eq!(quote_identifier("we`ird"), "`we``ird`");
    }

    #[test]
    fn test_tables_are_ordered_parents_first() {
        let position = |name: &str| TABLES.iter().position(|t| t.name == name).unwrap();
        assert!(position("users") < position("transactions"));
        assert!(position("transactions") < position("transaction_items"));
        assert!(position("products") < position("transaction_items"));
    }

    #[test]
    fn test_every_statement_is_idempotent() {
        for table in TABLES {
            assert!(
                table.ddl.starts_with("CREATE TABLE IF NOT EXISTS"),
                "{} is not guarded",
                table.name
            );
            assert!(table.ddl.contains(table.name));
        }
    }
}
