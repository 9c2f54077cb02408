//! NFL toolset
//!
//! Exposes the schedule API as the `GetGamesPlayed` tool. Arguments are
//! forwarded unchanged and the schedule body is returned as text.

use super::{
    helpers::text_result,
    models::{GetGamesPlayedInput, GET_GAMES_PLAYED_TOOL, NFL_SERVER_NAME},
    server::{ToolError, ToolServer},
};
use crate::{clients::NflApiClient, config::ScheduleBounds};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct NflTools {
    client: NflApiClient,
    bounds: ScheduleBounds,
}

impl NflTools {
    pub fn new(client: NflApiClient, bounds: ScheduleBounds) -> Self {
        Self { client, bounds }
    }

    /// Raw JSON text of the schedule call for a season and week.
    pub async fn get_games_played(&self, season: i32, week: i32) -> Result<String, ToolError> {
        self.client.get_schedule(season, week).await.map_err(|e| {
            error!(season, week, error = %e, "schedule lookup failed");
            ToolError::from(e)
        })
    }
}

#[async_trait]
impl ToolServer for NflTools {
    fn server_name(&self) -> &'static str {
        NFL_SERVER_NAME
    }

    fn tools(&self) -> Value {
        let week_description = format!(
            "The week number ({}-{} for regular season)",
            self.bounds.first_week, self.bounds.last_week
        );

        json!({
            "tools": [{
                "name": GET_GAMES_PLAYED_TOOL,
                "description": "Get games played for a given NFL season and week",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "season": {
                            "type": "integer",
                            "description": "The NFL season year (e.g., 2024)"
                        },
                        "week": {
                            "type": "integer",
                            "description": week_description
                        }
                    },
                    "required": ["season", "week"],
                    "additionalProperties": false
                }
            }]
        })
    }

    async fn call_tool(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        match name {
            GET_GAMES_PLAYED_TOOL => {
                let input: GetGamesPlayedInput = serde_json::from_value(args)
                    .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
                info!(season = input.season, week = input.week, "GetGamesPlayed");

                let raw = self.get_games_played(input.season, input.week).await?;
                Ok(text_result(raw))
            }
            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }
}
