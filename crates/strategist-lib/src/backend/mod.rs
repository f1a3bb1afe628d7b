//! Text-generation backend seam.
//!
//! The adapter only knows about [`TextGenerator`]; the production
//! implementation is [`gemini::GeminiClient`]. Failures are returned as an
//! explicit [`BackendError`] so callers can classify them without unwinding.

use std::time::Duration;

use async_trait::async_trait;

use crate::adapter::OutlineFailure;

pub mod gemini;

/// A backend that turns a single prompt into generated text.
///
/// Implementations must be safe to share across concurrent invocations; the
/// adapter holds them behind an `Arc` and never mutates them.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` to the backend and return the generated text unmodified.
    async fn generate_text(&self, prompt: &str) -> Result<String, BackendError>;
}

/// Failure while calling the backend or decoding its response.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request to backend failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("backend request timed out after {0:?}")]
    Timeout(Duration),

    #[error("backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("backend refused to generate content: {reason}")]
    Blocked { reason: String },

    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}

impl BackendError {
    /// Operator-facing classification of this error.
    pub fn failure(&self) -> OutlineFailure {
        match self {
            BackendError::Transport(_) => OutlineFailure::Transport,
            BackendError::Timeout(_) => OutlineFailure::Timeout,
            BackendError::Status { status, .. } => OutlineFailure::Status(*status),
            BackendError::Blocked { .. } => OutlineFailure::Blocked,
            BackendError::MalformedResponse(_) => OutlineFailure::MalformedResponse,
        }
    }
}
