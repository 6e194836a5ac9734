use sa_server::{AppState, build_router, logger};

use sa_config::Config;
use sa_core::InMemoryIdentityStore;

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal; real env vars still apply
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure log directory exists before the logger opens the file
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_deref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sa-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let identity_store = Arc::new(InMemoryIdentityStore::new());
    let app_state = AppState::from_config(&config, identity_store)?;

    // Periodically drop rate limiter state for idle clients
    let rate_limiter = app_state.rate_limiter.clone();
    let purge_every = Duration::from_secs(config.rate_limit.window_secs);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(purge_every);
        interval.tick().await;
        loop {
            interval.tick().await;
            rate_limiter.purge_stale();
            log::debug!(
                "Rate limiter purge: {} clients tracked",
                rate_limiter.tracked_clients()
            );
        }
    });

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual bound address matters when port is 0 / auto-assigned
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Graceful shutdown unavailable; server runs until killed");
            std::future::pending::<()>().await;
        }
    }
}
