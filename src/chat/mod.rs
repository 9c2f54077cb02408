//! Chat Relay Module
//!
//! This module contains the `/send` relay:
//! - Request/response models
//! - The chat-handling collaborator trait and its echo implementation
//! - Thread id helpers
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod service;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use service::{ChatError, ChatService, EchoChatService};
