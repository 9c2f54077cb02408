//! REST API handlers for schedule lookups

use super::{error::ScheduleError, helpers::*, models::GameResponse};
use crate::state::SharedState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use tracing::{error, info, warn};

/// Creates routes for schedule operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/schedule/:season/week/:week", get(get_schedule))
}

/// Endpoint: GET /schedule/:season/week/:week
/// Returns the games for a season and week, ordered by date.
async fn get_schedule(
    State(state): State<SharedState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<Json<Vec<GameResponse>>, ScheduleError> {
    let Path((season, week)) = path.map_err(|e| {
        warn!(error = %e.body_text(), "rejected schedule path");
        ScheduleError::InvalidPath
    })?;

    info!(season, week, "processing schedule request");

    if let Err(e) = validate_season_week(&state.schedule_bounds, season, week) {
        warn!(season, week, reason = %e, "invalid schedule request");
        return Err(e);
    }

    let records = state
        .schedule_store
        .games_by_season_and_week(season, week)
        .await
        .map_err(|e| {
            error!(season, week, error = %e, "error retrieving schedule");
            ScheduleError::from(e)
        })?;

    Ok(Json(project_games(records)))
}
