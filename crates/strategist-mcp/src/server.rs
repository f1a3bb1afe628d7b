//! Transport wiring for [`OutlineServer`].
//!
//! HTTP mode mounts rmcp's streamable HTTP service under [`MCP_PATH`] and a
//! static health route at `/`. Stdio mode serves the same handler over
//! stdin/stdout.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use rmcp::{
    model::*,
    tool_handler,
    transport::{
        stdio,
        streamable_http_server::{session::local::LocalSessionManager, StreamableHttpService},
    },
    ServerHandler, ServiceExt,
};
use tokio::net::TcpListener;

use crate::tools::OutlineServer;

/// Path prefix of the MCP endpoint.
pub const MCP_PATH: &str = "/mcp";

/// Body of the health-check response.
pub const HEALTH_BODY: &str = "Content strategist MCP server is running";

#[tool_handler]
impl ServerHandler for OutlineServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Content strategist MCP server: call `generate_outline` with a topic to receive a hierarchical article outline.".into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Static health check, independent of backend state.
async fn health_check() -> &'static str {
    HEALTH_BODY
}

/// Router with the MCP service under [`MCP_PATH`] and the health route at `/`.
///
/// Every MCP session gets a clone of `server`; clones share the backend.
pub fn build_router(server: OutlineServer) -> Router {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        Default::default(),
    );

    Router::new()
        .nest_service(MCP_PATH, service)
        .route("/", get(health_check))
}

/// Serve HTTP on an already-bound listener until `shutdown` resolves.
pub async fn serve_http<F>(server: OutlineServer, listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .context("failed to read listener address")?;
    tracing::info!("MCP endpoint listening on http://{addr}{MCP_PATH}");

    axum::serve(listener, build_router(server))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated with an error")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Serve MCP over stdin/stdout until the peer disconnects.
pub async fn serve_stdio(server: OutlineServer) -> Result<()> {
    tracing::info!("serving MCP over stdio");
    let service = server
        .serve(stdio())
        .await
        .context("failed to start stdio MCP service")?;
    service.waiting().await.context("stdio MCP service failed")?;
    Ok(())
}
