use order_desk::{check_version, router, storage::SYSTEM_VERSION, AppState, HttpStore, Settings};
use std::{net::SocketAddr, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let settings = Settings::from_env()?;
    if let Err(err) = check_version(&settings.data_path, SYSTEM_VERSION).await {
        error!("failed to record version marker: {}", err.message);
    }

    let store = HttpStore::new(settings.store_url.clone(), settings.store_timeout)?;
    let state = AppState::new(Arc::new(store), settings.reload_delay)
        .with_session_ttl(settings.session_ttl);
    if let Err(err) = state.reload().await {
        error!("initial load from {} failed: {err}", settings.store_url);
    }

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
