//! Schedule endpoint errors

use super::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every way a schedule request can fail, rendered as `{ "error": "..." }`
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Invalid path parameters. season_number and week_number must be integers.")]
    InvalidPath,

    #[error("Invalid season_number. Must be between {first} and {last}.")]
    InvalidSeason { first: i32, last: i32 },

    #[error("Invalid week_number. Must be between {first} and {last} inclusive.")]
    InvalidWeek { first: i32, last: i32 },

    /// The cause is logged, never sent to the client
    #[error("An error occurred while retrieving the schedule.")]
    Store(#[from] StoreError),
}

impl ScheduleError {
    pub fn status(&self) -> StatusCode {
        match self {
            ScheduleError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ScheduleError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
