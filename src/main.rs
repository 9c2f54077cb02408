use gameday_agents::config::AppConfig;
use gameday_agents::router::create_app_router;
use gameday_agents::schedule::PgScheduleStore;
use gameday_agents::state::AppState;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    // Configuration errors stop the process before any traffic is accepted
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return Err(e.into());
        }
    };
    if config.weather.api_key.is_none() {
        info!("ApiKey not set; weather tool calls will fail until it is configured");
    }

    // Initialize application state
    let store = Arc::new(PgScheduleStore::new(config.database.connect_options()));
    let state = Arc::new(AppState::new(&config, store));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "server running");
    axum::serve(listener, app).await?;

    Ok(())
}
