//! Client for api.weatherapi.com

use super::{
    error::{ClientError, ClientResult},
    http_client,
};
use crate::config::WeatherConfig;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, instrument};

const CURRENT_PATH: &str = "v1/current.json";

/// Current-conditions lookups against the weather provider
#[derive(Clone)]
pub struct WeatherApiClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl WeatherApiClient {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: http_client(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Retrieves the current observation for a postal code via
    /// `v1/current.json?key=<key>&q=<postal code>&aqi=no`.
    ///
    /// A blank postal code or a missing credential fails before any request
    /// is sent.
    #[instrument(level = "debug", skip(self))]
    pub async fn current_by_postal_code(&self, postal_code: &str) -> ClientResult<Value> {
        if postal_code.trim().is_empty() {
            return Err(ClientError::InvalidArgument(
                "Postal code must be provided.".into(),
            ));
        }
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ClientError::MissingCredential)?;

        let url = self
            .base_url
            .join(CURRENT_PATH)
            .map_err(|e| ClientError::InvalidArgument(e.to_string()))?;
        let endpoint = url.to_string();
        debug!(%endpoint, "requesting current weather");

        let response = self
            .client
            .get(url)
            .query(&[("key", api_key), ("q", postal_code), ("aqi", "no")])
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                endpoint: endpoint.clone(),
                source: source.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { endpoint, status });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| ClientError::Decode {
                endpoint,
                source: source.without_url(),
            })
    }
}
