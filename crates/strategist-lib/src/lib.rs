//! Library entry point for the content strategist outline adapter.
//!
//! The crate turns a topic into a hierarchical outline by filling a fixed
//! prompt template and handing it to a text-generation backend. The pieces are
//! split so the server crate can wire them together explicitly:
//!
//! - [`prompt`]: the constant content strategist template and its single
//!   substitution point.
//! - [`backend`]: the [`TextGenerator`] seam plus the Gemini REST client.
//! - [`adapter`]: [`OutlineAdapter`], which performs exactly one backend call
//!   per request and maps the result into the tool contract.
//! - [`model`]: the request/response value types.
//
// Public modules
pub mod adapter;
pub mod backend;
pub mod model;
pub mod prompt;

#[cfg(any(test, feature = "fake-backend"))]
pub mod fake;

// Re‑export primary types for ergonomic use.
pub use adapter::{OutlineAdapter, OutlineError, OutlineFailure, GENERIC_BACKEND_ERROR_MESSAGE};
pub use backend::{
    gemini::{GeminiClient, GeminiConfig},
    BackendError, TextGenerator,
};
pub use model::{outline_request::OutlineRequest, outline_response::OutlineResponse};
