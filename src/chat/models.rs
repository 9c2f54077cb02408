//! Chat Relay Models

use serde::{Deserialize, Serialize};

/// Request payload for the /send endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    /// The message content from the user
    #[serde(default)]
    pub request: String,

    /// Optional thread identifier. A new one is minted when absent.
    pub thread_id: Option<String>,
}

/// Response payload for the /send endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub response: String,
    pub thread_id: String,
}

/// What a [`ChatService`](super::ChatService) hands back for one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResult {
    pub response: String,
    pub thread_id: String,
}

impl From<ChatResult> for SendResponse {
    fn from(result: ChatResult) -> Self {
        Self {
            response: result.response,
            thread_id: result.thread_id,
        }
    }
}
