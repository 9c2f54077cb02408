//! Schedule Store Accessor
//!
//! Issues exactly one query per call against the `nfl_schedules` table.
//! A connection is opened for the call and closed afterwards.

use super::models::GameRecord;
use async_trait::async_trait;
use sqlx::{
    postgres::{PgConnectOptions, PgConnection},
    Connection,
};
use thiserror::Error;
use tracing::debug;

const GAMES_BY_SEASON_AND_WEEK: &str = "\
    SELECT id, title, venue, season, week_no, date, created_at, updated_at \
    FROM nfl_schedules \
    WHERE season = $1 AND week_no = $2 \
    ORDER BY date";

/// Failure talking to the schedule store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("schedule store connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("schedule query failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// Read access to scheduled games
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Returns every game for the season and week, ordered by date
    /// ascending. No match yields an empty list.
    async fn games_by_season_and_week(
        &self,
        season: i32,
        week: i32,
    ) -> Result<Vec<GameRecord>, StoreError>;
}

/// Postgres-backed [`ScheduleStore`]
#[derive(Debug, Clone)]
pub struct PgScheduleStore {
    options: PgConnectOptions,
}

impl PgScheduleStore {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl ScheduleStore for PgScheduleStore {
    async fn games_by_season_and_week(
        &self,
        season: i32,
        week: i32,
    ) -> Result<Vec<GameRecord>, StoreError> {
        let mut conn = PgConnection::connect_with(&self.options)
            .await
            .map_err(StoreError::Connect)?;

        let games = sqlx::query_as::<_, GameRecord>(GAMES_BY_SEASON_AND_WEEK)
            .bind(season)
            .bind(week)
            .fetch_all(&mut conn)
            .await
            .map_err(StoreError::Query)?;

        debug!(season, week, rows = games.len(), "schedule query complete");

        // A failed close only loses the connection, the rows are already read.
        if let Err(e) = conn.close().await {
            debug!(error = %e, "closing schedule store connection failed");
        }

        Ok(games)
    }
}
