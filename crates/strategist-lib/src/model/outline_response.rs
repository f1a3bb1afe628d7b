use serde::{Deserialize, Serialize};

/// Successful result of an outline request.
///
/// `outline` is the backend's generated text, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineResponse {
    pub outline: String,
}
