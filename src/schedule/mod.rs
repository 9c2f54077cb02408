//! Schedule Lookup Module
//!
//! This module contains the schedule read path:
//! - Domain models (GameRecord, GameResponse)
//! - The store accessor trait and its Postgres implementation
//! - Validation and projection helpers
//! - REST API handlers

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use store::{PgScheduleStore, ScheduleStore, StoreError};
