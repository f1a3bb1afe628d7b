//! Outline tool adapter.
//!
//! Maps one [`OutlineRequest`] onto exactly one backend call and maps the
//! outcome back into the tool contract. Backend failures are never retried and
//! never leak their detail: the caller always sees
//! [`GENERIC_BACKEND_ERROR_MESSAGE`], while the underlying error is logged and
//! its classification is kept on [`OutlineError::kind`].

use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::backend::TextGenerator;
use crate::model::{outline_request::OutlineRequest, outline_response::OutlineResponse};
use crate::prompt::build_outline_prompt;

/// The only error text a tool caller ever receives.
pub const GENERIC_BACKEND_ERROR_MESSAGE: &str =
    "there was an issue contacting the content strategist backend";

/// Internal classification of a failed outline call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineFailure {
    Transport,
    Timeout,
    /// Non-success HTTP status from the backend.
    Status(u16),
    Blocked,
    MalformedResponse,
    /// The caller went away before the backend answered.
    Cancelled,
}

impl OutlineFailure {
    /// Stable short code used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            OutlineFailure::Transport => "transport",
            OutlineFailure::Timeout => "timeout",
            OutlineFailure::Status(_) => "status",
            OutlineFailure::Blocked => "blocked",
            OutlineFailure::MalformedResponse => "malformed_response",
            OutlineFailure::Cancelled => "cancelled",
        }
    }
}

/// Opaque failure of [`OutlineAdapter::generate_outline`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", GENERIC_BACKEND_ERROR_MESSAGE)]
pub struct OutlineError {
    kind: OutlineFailure,
}

impl OutlineError {
    pub fn new(kind: OutlineFailure) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> OutlineFailure {
        self.kind
    }
}

/// Stateless adapter between the outline tool and a [`TextGenerator`].
///
/// Cloning is cheap; clones share the same backend handle.
#[derive(Clone)]
pub struct OutlineAdapter {
    backend: Arc<dyn TextGenerator>,
}

impl OutlineAdapter {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    /// Generate an outline for `request.topic`.
    pub async fn generate_outline(
        &self,
        request: &OutlineRequest,
    ) -> Result<OutlineResponse, OutlineError> {
        self.generate_outline_with_cancel(request, CancellationToken::new())
            .await
    }

    /// Generate an outline, abandoning the backend call once `cancel` fires.
    ///
    /// A token that is already cancelled short-circuits before the backend is
    /// contacted.
    pub async fn generate_outline_with_cancel(
        &self,
        request: &OutlineRequest,
        cancel: CancellationToken,
    ) -> Result<OutlineResponse, OutlineError> {
        let prompt = build_outline_prompt(&request.topic);

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!(
                    kind = OutlineFailure::Cancelled.code(),
                    "outline request cancelled before the backend responded"
                );
                return Err(OutlineError::new(OutlineFailure::Cancelled));
            }
            result = self.backend.generate_text(&prompt) => result,
        };

        match result {
            Ok(outline) => Ok(OutlineResponse { outline }),
            Err(err) => {
                let kind = err.failure();
                tracing::error!(
                    kind = kind.code(),
                    error = %err,
                    "failed to generate outline from backend"
                );
                Err(OutlineError::new(kind))
            }
        }
    }
}

impl fmt::Debug for OutlineAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineAdapter").finish_non_exhaustive()
    }
}
