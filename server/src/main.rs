use anyhow::{Context, Result};
use pokeduel_server::{ServerConfig, serve};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %config.bind_addr,
        matching = ?config.matching,
        "Battle service listening"
    );

    serve(listener, config.matching).await;
    Ok(())
}
