use tracing_subscriber::EnvFilter;

use goooals_server::config::ServerConfig;
use goooals_server::router;
use goooals_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::from_config(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        catalog = %config.catalog_path.display(),
        email = config.smtp.is_some(),
        "goooals server listening"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}
