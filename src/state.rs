//! Application State
//!
//! Shared, read-only collaborators handed to every handler.

use crate::{
    chat::{ChatService, EchoChatService},
    clients::{NflApiClient, WeatherApiClient},
    config::{AppConfig, ScheduleBounds},
    mcp::{NflTools, WeatherTools},
    schedule::ScheduleStore,
};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Collaborators for every route. Nothing here is mutated after startup.
pub struct AppState {
    pub schedule_store: Arc<dyn ScheduleStore>,
    pub schedule_bounds: ScheduleBounds,
    pub chat_service: Arc<dyn ChatService>,
    pub nfl_tools: NflTools,
    pub weather_tools: WeatherTools,
}

impl AppState {
    /// Wires clients and toolsets from `config` around the given store,
    /// using the echo chat service.
    pub fn new(config: &AppConfig, schedule_store: Arc<dyn ScheduleStore>) -> Self {
        Self::with_chat_service(config, schedule_store, Arc::new(EchoChatService))
    }

    pub fn with_chat_service(
        config: &AppConfig,
        schedule_store: Arc<dyn ScheduleStore>,
        chat_service: Arc<dyn ChatService>,
    ) -> Self {
        let nfl_client = NflApiClient::new(&config.nfl_api);
        let weather_client = WeatherApiClient::new(&config.weather);

        Self {
            schedule_store,
            schedule_bounds: config.schedule_bounds,
            chat_service,
            nfl_tools: NflTools::new(nfl_client, config.schedule_bounds),
            weather_tools: WeatherTools::new(weather_client),
        }
    }
}
