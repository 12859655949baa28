//! HTTP server initialization and runtime setup.
//!
//! Handles repository selection, cache warm-up and the Axum server lifecycle.

use crate::application::services::{LinkService, LinkSettings};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::domain::store::LinkStore;
use crate::infrastructure::persistence::{
    self, MemoryLinkRepository, PgLinkRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations (or the in-memory repository)
/// - Link cache, loaded from the repository
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Existing links cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = open_repository(&config).await?;

    let store = Arc::new(LinkStore::new(repository));
    let loaded = store
        .load_all()
        .await
        .context("Failed to load links into memory")?;
    tracing::info!("Loaded {} links into memory", loaded);

    let link_service = Arc::new(LinkService::new(
        store,
        CodeGenerator::new(),
        LinkSettings::from(&config),
    ));
    let state = AppState::new(link_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the link repository selected by the configuration.
async fn open_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("No database configured; links are kept in memory and lost on restart");
        return Ok(Arc::new(MemoryLinkRepository::new()));
    };

    let pool = persistence::connect(database_url, &config.pool_settings())
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    persistence::run_migrations(&pool)
        .await
        .context("Failed to apply migrations")?;

    Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
