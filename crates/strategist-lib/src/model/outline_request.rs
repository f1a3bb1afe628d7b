use serde::{Deserialize, Serialize};

/// A single outline request as received from the tool caller.
///
/// `topic` is only type-checked by the RPC layer; it may be empty and is
/// embedded into the prompt without sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineRequest {
    pub topic: String,
}

impl OutlineRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }
}
