//! Outbound HTTP clients
//!
//! Each client wraps a `reqwest::Client` with a fixed base address and
//! issues a single GET per operation. Non-success statuses fail the call;
//! nothing is retried.

pub mod error;
pub mod nfl;
pub mod weather;

pub use error::ClientError;
pub use nfl::NflApiClient;
pub use weather::WeatherApiClient;

use reqwest::Client;

const USER_AGENT: &str = concat!("gameday-agents/", env!("CARGO_PKG_VERSION"));

/// Builds the shared transport; falls back to reqwest defaults if the
/// builder rejects the user agent.
fn http_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}
