//! Client for the schedule API

use super::{
    error::{ClientError, ClientResult},
    http_client,
};
use crate::config::NflApiConfig;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

/// Reads schedules from the schedule HTTP endpoint
#[derive(Debug, Clone)]
pub struct NflApiClient {
    client: Client,
    base_url: Url,
}

impl NflApiClient {
    pub fn new(config: &NflApiConfig) -> Self {
        Self {
            client: http_client(),
            base_url: config.base_url.clone(),
        }
    }

    /// `{base}schedule/{season}/week/{week}`
    pub fn schedule_url(&self, season: i32, week: i32) -> ClientResult<Url> {
        self.base_url
            .join(&format!("schedule/{season}/week/{week}"))
            .map_err(|e| ClientError::InvalidArgument(e.to_string()))
    }

    /// Fetches the raw schedule body for a season and week.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_schedule(&self, season: i32, week: i32) -> ClientResult<String> {
        let url = self.schedule_url(season, week)?;
        let endpoint = url.to_string();
        debug!(%endpoint, "requesting schedule");

        let response = self.client.get(url).send().await.map_err(|source| {
            ClientError::Transport {
                endpoint: endpoint.clone(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { endpoint, status });
        }

        response
            .text()
            .await
            .map_err(|source| ClientError::Decode { endpoint, source })
    }
}
