//! MCP Protocol Models and Constants
//!
//! Data structures and constants for the JSON-RPC envelope and the tool
//! argument/response contracts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";
/// Server identifier of the NFL toolset
pub const NFL_SERVER_NAME: &str = "nfl-mcp";
/// Server identifier of the weather toolset
pub const WEATHER_SERVER_NAME: &str = "weather-mcp";
/// Tool returning the games for a season and week
pub const GET_GAMES_PLAYED_TOOL: &str = "GetGamesPlayed";
/// Tool returning current conditions for a postal code
pub const GET_WEATHER_TOOL: &str = "GetWeatherByPostalCode";

/// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

// =============================================================================
// Tool Contracts
// =============================================================================

/// Arguments of the GetGamesPlayed tool
#[derive(Debug, Deserialize)]
pub struct GetGamesPlayedInput {
    pub season: i32,
    pub week: i32,
}

/// Arguments of the GetWeatherByPostalCode tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWeatherByPostalCodeInput {
    pub postal_code: String,
}

/// Flattened result of the GetWeatherByPostalCode tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForPostalCodeResponse {
    /// `location.name`
    pub location_name: String,
    /// `location.region`
    pub location_region: String,
    /// The postal code that was queried
    pub postal_code: String,
    /// `current.temp_f`, degrees Fahrenheit
    pub temp: f64,
    /// `current.wind_mph`
    pub wind: f64,
    /// `current.condition.text`
    pub condition_description: String,
}
