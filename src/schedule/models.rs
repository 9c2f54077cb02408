//! Schedule Domain Models

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

/// One row of the `nfl_schedules` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct GameRecord {
    /// Internal identifier; never returned to clients
    pub id: Uuid,
    pub title: String,
    pub venue: String,
    pub season: i32,
    pub week_no: i32,
    /// Kickoff timestamp
    pub date: NaiveDateTime,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Public projection of a [`GameRecord`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub title: String,
    pub venue: String,
    pub season: i32,
    pub week_no: i32,
    /// Calendar date of the game (YYYY-MM-DD)
    pub date: NaiveDate,
}

impl From<GameRecord> for GameResponse {
    fn from(record: GameRecord) -> Self {
        Self {
            title: record.title,
            venue: record.venue,
            season: record.season,
            week_no: record.week_no,
            date: record.date.date(),
        }
    }
}
