//! Chat-handling collaborator
//!
//! [`ChatService`] is the seam where a hosted model would plug in. The only
//! implementation today is [`EchoChatService`].

use super::{helpers::get_or_create_thread_id, models::ChatResult};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Prefix the echo service puts in front of the user's message
pub const ECHO_PREFIX: &str = "Echo: ";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat backend failed: {0}")]
    Backend(String),
}

/// Posts a message to an agent and returns its reply
#[async_trait]
pub trait ChatService: Send + Sync {
    /// `thread_id` resumes an existing conversation when present; otherwise
    /// the implementation mints one.
    async fn post_message(
        &self,
        message: &str,
        thread_id: Option<&str>,
    ) -> Result<ChatResult, ChatError>;
}

/// Replies with the incoming message behind [`ECHO_PREFIX`]. Keeps no
/// conversation state.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoChatService;

#[async_trait]
impl ChatService for EchoChatService {
    async fn post_message(
        &self,
        message: &str,
        thread_id: Option<&str>,
    ) -> Result<ChatResult, ChatError> {
        let thread_id = get_or_create_thread_id(thread_id);
        debug!(thread_id = %thread_id, "echoing chat message");

        Ok(ChatResult {
            response: format!("{ECHO_PREFIX}{message}"),
            thread_id,
        })
    }
}
