//! MCP surface for the content strategist outline tool.
//!
//! [`tools::OutlineServer`] owns the tool router, [`server`] mounts it over
//! streamable HTTP (or stdio) and [`config`] resolves process settings.

pub mod config;
pub mod logging;
pub mod server;
pub mod tools;

pub use config::{ConfigError, ServerConfig, TransportMode};
pub use server::{build_router, serve_http, serve_stdio, HEALTH_BODY, MCP_PATH};
pub use tools::{OutlineServer, TOOL_NAME};
