//! Game-day services
//!
//! HTTP glue for a chat relay, a schedule lookup API, and two MCP toolsets
//! (NFL schedules and current weather).

// Domain modules
pub mod chat;
pub mod mcp;
pub mod schedule;

// Infrastructure
pub mod clients;
pub mod config;
pub mod router;
pub mod state;
