//! Mock Address Validator
//!
//! Stand-in for the field validation service used during local development.
//! A field is valid when its value is non-empty; every call is delayed to
//! simulate a remote service.

mod config;
mod server;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use config::MockConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,mock_validator=debug".into()),
        )
        .init();

    let config = MockConfig::from_env()?;
    let app = server::router(config.settings);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Mock Address Validator running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
