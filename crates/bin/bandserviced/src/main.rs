//! # bandserviced — bandservice daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the band repository and the user-service client (adapters)
//! - Construct the band service, injecting the repository via its port trait
//! - Build the axum router, injecting application state
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use bandservice_adapter_http_axum::state::AppState;
use bandservice_adapter_storage_sqlite_sqlx::SqliteBandRepository;
use bandservice_app::services::band_service::BandService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = bandservice_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let band_repo = SqliteBandRepository::new(db.pool().clone());

    // User service
    let user_directory = bandservice_adapter_users_reqwest::Config {
        base_url: config.users.base_url.clone(),
        timeout: config.users_timeout(),
    }
    .build()?;

    // HTTP
    let state = AppState::new(BandService::new(band_repo), user_directory);
    let app = bandservice_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, users = %config.users.base_url, "bandserviced listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("bandserviced stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "unable to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "unable to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
