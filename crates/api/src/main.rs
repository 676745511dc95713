use std::process::ExitCode;
use std::sync::Arc;

use stockroom_api::config::{ServerConfig, StoreBackend};
use stockroom_api::router::build_app_router;
use stockroom_api::state::AppState;
use stockroom_db::{ItemStore, MemoryItemStore, PgItemStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "stockroom_api=debug,stockroom_db=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        host = %config.host,
        port = config.port,
        backend = ?config.store_backend,
        "Loaded server configuration",
    );

    // --- Item store ---
    let store = match build_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Invalid DATABASE_URL");
            return ExitCode::FAILURE;
        }
    };

    // --- Router ---
    let app = build_app_router(AppState::new(store), &config);

    // --- Start server ---
    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind to address");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(%addr, "Server listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Graceful shutdown complete");
    ExitCode::SUCCESS
}

/// Construct the configured item store.
///
/// An unreachable database is not fatal: the failure is logged and the
/// server keeps listening, with item requests failing until it comes up.
async fn build_store(config: &ServerConfig) -> Result<Arc<dyn ItemStore>, sqlx::Error> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory item store; data is lost on exit");
            Ok(Arc::new(MemoryItemStore::new()))
        }
        StoreBackend::Postgres => {
            let pool =
                stockroom_db::create_pool(&config.database_url, config.db_max_connections)?;
            let store = PgItemStore::new(pool);

            match store.ensure_schema().await {
                Ok(()) => tracing::info!("Connected to database"),
                Err(e) => tracing::error!(error = %e, "Failed to connect to database"),
            }

            Ok(Arc::new(store))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
