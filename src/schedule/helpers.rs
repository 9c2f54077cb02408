//! Schedule Helpers
//!
//! Pure functions for request validation and response projection.

use super::{
    error::ScheduleError,
    models::{GameRecord, GameResponse},
};
use crate::config::ScheduleBounds;

/// Checks the season and week against the configured bounds. The season is
/// checked first, so a request with both out of range reports the season.
pub fn validate_season_week(
    bounds: &ScheduleBounds,
    season: i32,
    week: i32,
) -> Result<(), ScheduleError> {
    if !bounds.season_in_range(season) {
        return Err(ScheduleError::InvalidSeason {
            first: bounds.first_season,
            last: bounds.last_season,
        });
    }
    if !bounds.week_in_range(week) {
        return Err(ScheduleError::InvalidWeek {
            first: bounds.first_week,
            last: bounds.last_week,
        });
    }
    Ok(())
}

/// Drops internal fields and orders the games by date. The sort is stable,
/// so games on the same date keep the store's order.
pub fn project_games(records: Vec<GameRecord>) -> Vec<GameResponse> {
    let mut games: Vec<GameResponse> = records.into_iter().map(GameResponse::from).collect();
    games.sort_by_key(|g| g.date);
    games
}
