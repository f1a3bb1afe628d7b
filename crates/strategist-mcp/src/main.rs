// Rust guideline compliant 2026-02-13

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use strategist::{GeminiClient, OutlineAdapter};
use strategist_mcp::{logging, serve_http, serve_stdio, OutlineServer, ServerConfig, TransportMode};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = ServerConfig::parse();
    let gemini = match config.gemini_config() {
        Ok(gemini) => gemini,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "resolved configuration");

    let backend = GeminiClient::new(gemini)?;
    let server = OutlineServer::new(OutlineAdapter::new(Arc::new(backend)));

    match config.transport {
        TransportMode::Http => {
            let bind_addr = config.bind_addr();
            let listener = TcpListener::bind(&bind_addr)
                .await
                .with_context(|| format!("failed to bind {bind_addr}"))?;
            serve_http(server, listener, shutdown_signal()).await
        }
        TransportMode::Stdio => serve_stdio(server).await,
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
