//! Model Context Protocol (MCP) Module
//!
//! This module contains the MCP tool servers, including:
//! - Protocol models (JsonRpcRequest, constants)
//! - RPC helpers (success/error envelopes, tool result content)
//! - The `ToolServer` seam and JSON-RPC dispatch
//! - The NFL and weather toolsets

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod nfl;
pub mod server;
pub mod weather;

// Re-export commonly used types and functions
pub use handlers::routes;
pub use nfl::NflTools;
pub use server::{ToolError, ToolServer};
pub use weather::WeatherTools;
