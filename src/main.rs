use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use tillpoint::cli::{Cli, Commands};
use tillpoint::config::AppConfig;
use tillpoint::logging::init_tracing;
use tillpoint::router::init_router;
use tillpoint::state::init_app_state;
use tillpoint_db::{SessionFactory, ensure_database, init_schema};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    init_tracing();

    let result = match cli.command() {
        Commands::Serve => serve().await,
        Commands::InitDb => init_db().await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let state = init_app_state(&config).await?;
    let sessions = state.sessions.clone();
    let app = init_router(state);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("🚀 Server running on http://{}", address);
    info!("📚 Swagger UI available at http://{}/swagger-ui", address);
    info!("📖 Scalar UI available at http://{}/scalar", address);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    sessions.close().await;
    served?;

    info!("Server stopped");
    Ok(())
}

async fn init_db() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    ensure_database(&config.database).await?;
    let sessions = SessionFactory::connect(&config.database, &config.pool).await?;
    let result = init_schema(&sessions).await;
    sessions.close().await;
    result?;

    info!("✅ Database initialized");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
