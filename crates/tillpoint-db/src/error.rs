use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The connection settings could not be turned into driver options.
    #[error("invalid database connection settings")]
    Configuration(#[source] sqlx::Error),

    /// The server is unreachable, rejected the login, or the pool ran dry.
    #[error("database is unavailable")]
    Connectivity(#[source] sqlx::Error),

    #[error("failed to create database {database}")]
    CreateDatabase {
        database: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to create table {table}")]
    Schema {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Query(#[from] sqlx::Error),
}

impl DbError {
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }
}
