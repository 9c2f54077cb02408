//! Tool server seam
//!
//! A [`ToolServer`] names a set of tools, describes them, and runs them.
//! The JSON-RPC plumbing in [`handlers`](super::handlers) is shared by every
//! implementation.

use super::models::{INTERNAL_ERROR, INVALID_PARAMS};
use crate::clients::ClientError;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Downstream call failed; detail stays in the source
    #[error("Tool execution failed")]
    Upstream(#[from] ClientError),

    /// Provider answered with a payload missing required fields
    #[error("Tool execution failed")]
    MalformedPayload(#[source] serde_json::Error),
}

impl ToolError {
    /// JSON-RPC error code for this failure
    pub fn code(&self) -> i32 {
        match self {
            ToolError::UnknownTool(_) | ToolError::InvalidArguments(_) => INVALID_PARAMS,
            ToolError::Upstream(_) | ToolError::MalformedPayload(_) => INTERNAL_ERROR,
        }
    }
}

#[async_trait]
pub trait ToolServer: Send + Sync {
    /// Reported as `serverInfo.name` during `initialize`
    fn server_name(&self) -> &'static str;

    /// Body of the `tools/list` result
    fn tools(&self) -> Value;

    /// Runs a tool and returns the `tools/call` result
    async fn call_tool(&self, name: &str, args: Value) -> Result<Value, ToolError>;
}
