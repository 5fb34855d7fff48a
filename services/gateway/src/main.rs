mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use config::Config;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        max_rounds = config.max_rounds,
        "Starting casino simulation gateway"
    );

    let state = AppState::new(&config);
    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;

    tracing::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
