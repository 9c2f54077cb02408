//! Process configuration
//!
//! All environment lookups happen here, once, at startup. The resulting
//! [`AppConfig`] is handed to each component by reference; nothing in the
//! request path reads process environment.

use reqwest::Url;
use sqlx::postgres::PgConnectOptions;
use std::{fmt, net::SocketAddr};
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Default provider address for the weather client
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.weatherapi.com/";
/// Default address of the schedule API consumed by the NFL toolset
pub const DEFAULT_NFL_API_BASE_URL: &str = "http://localhost:8000/";
/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
/// Default Postgres port
pub const DEFAULT_PG_PORT: u16 = 5432;

/// Earliest season the schedule endpoint accepts
pub const FIRST_SEASON: i32 = 2020;
/// Latest season the schedule endpoint accepts
pub const LAST_SEASON: i32 = 2030;
/// Number of regular-season weeks accepted by the schedule endpoint.
///
/// The NFL tool description is rendered from this value. The league moved to
/// an 18 week regular season in 2021; raising this is pending confirmation
/// from the data owner.
pub const REGULAR_SEASON_WEEKS: i32 = 17;

// =============================================================================
// Errors
// =============================================================================

/// Startup configuration failures. Any of these prevents the server from
/// accepting traffic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

// =============================================================================
// Config Models
// =============================================================================

/// Connection parameters for the schedule store
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

impl DatabaseConfig {
    /// Builds sqlx connect options; no connection is opened here.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Weather provider settings
#[derive(Clone)]
pub struct WeatherConfig {
    pub base_url: Url,
    /// Provider credential. Optional at startup, required per call.
    pub api_key: Option<String>,
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Schedule API settings used by the NFL toolset
#[derive(Debug, Clone)]
pub struct NflApiConfig {
    pub base_url: Url,
}

/// Accepted season and week ranges for schedule lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleBounds {
    pub first_season: i32,
    pub last_season: i32,
    pub first_week: i32,
    pub last_week: i32,
}

impl Default for ScheduleBounds {
    fn default() -> Self {
        Self {
            first_season: FIRST_SEASON,
            last_season: LAST_SEASON,
            first_week: 1,
            last_week: REGULAR_SEASON_WEEKS,
        }
    }
}

impl ScheduleBounds {
    pub fn season_in_range(&self, season: i32) -> bool {
        (self.first_season..=self.last_season).contains(&season)
    }

    pub fn week_in_range(&self, week: i32) -> bool {
        (self.first_week..=self.last_week).contains(&week)
    }
}

/// Everything the server needs, resolved once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
    pub weather: WeatherConfig,
    pub nfl_api: NflApiConfig,
    pub schedule_bounds: ScheduleBounds,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| non_blank(name).ok_or(ConfigError::Missing(name));

        let port = match non_blank("PG_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PG_PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PG_PORT,
        };

        let database = DatabaseConfig {
            host: required("PG_HOST")?,
            port,
            user: required("PG_USER")?,
            password: required("PG_PASSWORD")?,
            database: required("PG_DATABASE")?,
        };

        let weather = WeatherConfig {
            base_url: parse_base_url(
                "WEATHER_BASE_URL",
                non_blank("WEATHER_BASE_URL").as_deref(),
                DEFAULT_WEATHER_BASE_URL,
            )?,
            api_key: non_blank("ApiKey"),
        };

        let nfl_api = NflApiConfig {
            base_url: parse_base_url(
                "NFL_API_BASE_URL",
                non_blank("NFL_API_BASE_URL").as_deref(),
                DEFAULT_NFL_API_BASE_URL,
            )?,
        };

        let bind_raw = non_blank("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        Ok(Self {
            bind_addr,
            database,
            weather,
            nfl_api,
            schedule_bounds: ScheduleBounds::default(),
        })
    }
}

/// Parses a base address, forcing exactly one trailing slash so relative
/// joins keep the configured path prefix.
fn parse_base_url(
    name: &'static str,
    configured: Option<&str>,
    default: &str,
) -> Result<Url, ConfigError> {
    let raw = configured.unwrap_or(default).trim();
    let normalized = format!("{}/", raw.trim_end_matches('/'));
    Url::parse(&normalized).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    const DB_VARS: [(&str, &str); 4] = [
        ("PG_HOST", "db.internal"),
        ("PG_USER", "schedules"),
        ("PG_PASSWORD", "hunter2"),
        ("PG_DATABASE", "nfl-schedules"),
    ];

    #[test]
    fn defaults_apply_when_only_database_is_configured() {
        let config = AppConfig::from_lookup(lookup_from(&DB_VARS)).unwrap();

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, DEFAULT_PG_PORT);
        assert_eq!(config.weather.base_url.as_str(), DEFAULT_WEATHER_BASE_URL);
        assert_eq!(config.nfl_api.base_url.as_str(), DEFAULT_NFL_API_BASE_URL);
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(config.weather.api_key.is_none());
        assert_eq!(config.schedule_bounds, ScheduleBounds::default());
    }

    #[test]
    fn missing_database_variable_is_fatal() {
        let vars = [
            ("PG_HOST", "db.internal"),
            ("PG_USER", "schedules"),
            ("PG_DATABASE", "nfl-schedules"),
        ];
        let err = AppConfig::from_lookup(lookup_from(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("PG_PASSWORD"));
    }

    #[test]
    fn blank_variable_counts_as_missing() {
        let mut vars = DB_VARS.to_vec();
        vars[0] = ("PG_HOST", "   ");
        let err = AppConfig::from_lookup(lookup_from(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("PG_HOST"));
    }

    #[test]
    fn base_urls_are_normalized_to_one_trailing_slash() {
        let mut vars = DB_VARS.to_vec();
        vars.push(("WEATHER_BASE_URL", "http://weather.test/proxy//"));
        vars.push(("NFL_API_BASE_URL", "http://nfl.test/api"));
        let config = AppConfig::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.weather.base_url.as_str(), "http://weather.test/proxy/");
        assert_eq!(config.nfl_api.base_url.as_str(), "http://nfl.test/api/");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut vars = DB_VARS.to_vec();
        vars.push(("PG_PORT", "five"));
        let err = AppConfig::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PG_PORT", .. }));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let mut vars = DB_VARS.to_vec();
        vars.push(("ApiKey", "super-secret"));
        let config = AppConfig::from_lookup(lookup_from(&vars)).unwrap();
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = ScheduleBounds::default();
        assert!(bounds.season_in_range(2020));
        assert!(bounds.season_in_range(2030));
        assert!(!bounds.season_in_range(2019));
        assert!(!bounds.season_in_range(2031));
        assert!(bounds.week_in_range(1));
        assert!(bounds.week_in_range(17));
        assert!(!bounds.week_in_range(0));
        assert!(!bounds.week_in_range(18));
    }
}
