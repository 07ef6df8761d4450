use tillpoint_db::{SessionFactory, ensure_database, init_schema};
use tracing::info;

use crate::config::{AppConfig, CorsConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub sessions: SessionFactory,
    pub cors_config: CorsConfig,
}

/// Prepares the database and builds the state shared by all handlers.
///
/// Creates the database if needed, opens the pool and creates missing
/// tables. Any failure is returned so startup can abort.
pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    info!(
        host = %config.database.host,
        port = config.database.port,
        database = %config.database.name,
        user = %config.database.user,
        "Connecting to database"
    );

    ensure_database(&config.database).await?;
    let sessions = SessionFactory::connect(&config.database, &config.pool).await?;
    init_schema(&sessions).await?;

    Ok(AppState {
        sessions,
        cors_config: config.cors.clone(),
    })
}
