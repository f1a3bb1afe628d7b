//! Deterministic in-process backend for tests.
//!
//! Compiled for this crate's own tests and, via the `fake-backend` feature,
//! for downstream crates that want to exercise the adapter without a network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::backend::{BackendError, TextGenerator};

/// What a [`ScriptedGenerator`] answers with.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Fixed generated text.
    Text(String),
    /// The received prompt, returned as the generated text.
    EchoPrompt,
    /// `BackendError::Status`.
    Status { status: u16, message: String },
    /// `BackendError::MalformedResponse`.
    Malformed(String),
}

/// [`TextGenerator`] that replays a script and records what it was asked.
#[derive(Debug)]
pub struct ScriptedGenerator {
    reply: ScriptedReply,
    delay: Option<Duration>,
    calls: AtomicUsize,
    completed: AtomicUsize,
    in_flight: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(reply: ScriptedReply) -> Self {
        Self {
            reply,
            delay: None,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Sleep for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls that reached the backend.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of calls that ran to completion (not dropped mid-flight).
    pub fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Calls currently awaiting a reply. Drops back when a call completes or
    /// its future is dropped.
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in arrival order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let _in_flight = InFlight(&self.in_flight);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            ScriptedReply::Text(text) => Ok(text.clone()),
            ScriptedReply::EchoPrompt => Ok(prompt.to_string()),
            ScriptedReply::Status { status, message } => Err(BackendError::Status {
                status: *status,
                message: message.clone(),
            }),
            ScriptedReply::Malformed(detail) => {
                Err(BackendError::MalformedResponse(detail.clone()))
            }
        }
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
