//! Process configuration.
//!
//! Every setting is a CLI flag with an environment-variable fallback, except
//! the API key, which is read from the environment only so it never appears
//! in a process listing. `main` loads a `.env` file (if any) before parsing,
//! so values there behave like real environment variables.

use std::fmt;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use strategist::backend::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use strategist::GeminiConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// How the MCP tool surface is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportMode {
    /// Streamable HTTP under `/mcp`, plus the health route at `/`.
    Http,
    /// MCP over stdin/stdout; no HTTP listener.
    Stdio,
}

/// Fatal startup configuration problems.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{} is not set; refusing to start without a backend credential", API_KEY_ENV)]
    MissingApiKey,
}

/// Server settings resolved once at startup and passed down explicitly.
#[derive(Parser, Clone)]
#[command(
    name = "strategist-mcp",
    about = "MCP server exposing a content strategist outline tool backed by Gemini",
    version
)]
pub struct ServerConfig {
    /// Interface to bind the HTTP listener to.
    #[arg(long, env = "MCP_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port for the HTTP listener.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Gemini API key, taken from `GEMINI_API_KEY` at parse time. Required.
    #[arg(skip = std::env::var(API_KEY_ENV).ok())]
    pub api_key: Option<String>,

    /// Gemini model used for generation.
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Gemini REST API.
    #[arg(long, env = "GEMINI_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Whole-request timeout for backend calls, in seconds.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// Transport for the MCP surface.
    #[arg(long, env = "MCP_TRANSPORT", value_enum, default_value_t = TransportMode::Http)]
    pub transport: TransportMode,
}

impl ServerConfig {
    /// `host:port` string for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Backend settings, or [`ConfigError::MissingApiKey`] when the
    /// credential is absent or blank.
    pub fn gemini_config(&self) -> Result<GeminiConfig, ConfigError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(GeminiConfig {
            api_key: api_key.to_string(),
            model: self.model.clone(),
            base_url: self.api_base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        })
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("transport", &self.transport)
            .finish()
    }
}
