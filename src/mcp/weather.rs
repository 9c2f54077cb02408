//! Weather toolset
//!
//! Exposes the provider's current-conditions lookup as the
//! `GetWeatherByPostalCode` tool and flattens the nested payload.

use super::{
    helpers::structured_result,
    models::{
        GetWeatherByPostalCodeInput, WeatherForPostalCodeResponse, GET_WEATHER_TOOL,
        WEATHER_SERVER_NAME,
    },
    server::{ToolError, ToolServer},
};
use crate::clients::WeatherApiClient;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use tracing::{error, info};

// Provider payload, only the fields we map. All are required; text fields
// may be null, which maps to an empty string.

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
struct ProviderPayload {
    location: ProviderLocation,
    current: ProviderCurrent,
}

#[derive(Deserialize)]
struct ProviderLocation {
    #[serde(deserialize_with = "null_as_empty")]
    name: String,
    #[serde(deserialize_with = "null_as_empty")]
    region: String,
}

#[derive(Deserialize)]
struct ProviderCurrent {
    temp_f: f64,
    wind_mph: f64,
    condition: ProviderCondition,
}

#[derive(Deserialize)]
struct ProviderCondition {
    #[serde(deserialize_with = "null_as_empty")]
    text: String,
}

/// Maps a provider payload into the flat tool response. Any missing or
/// mistyped field fails the whole mapping.
pub fn flatten_payload(
    postal_code: &str,
    payload: Value,
) -> Result<WeatherForPostalCodeResponse, serde_json::Error> {
    let ProviderPayload { location, current } = serde_json::from_value(payload)?;

    Ok(WeatherForPostalCodeResponse {
        location_name: location.name,
        location_region: location.region,
        postal_code: postal_code.to_string(),
        temp: current.temp_f,
        wind: current.wind_mph,
        condition_description: current.condition.text,
    })
}

#[derive(Clone)]
pub struct WeatherTools {
    client: WeatherApiClient,
}

impl WeatherTools {
    pub fn new(client: WeatherApiClient) -> Self {
        Self { client }
    }

    pub async fn get_weather_by_postal_code(
        &self,
        postal_code: &str,
    ) -> Result<WeatherForPostalCodeResponse, ToolError> {
        if postal_code.trim().is_empty() {
            return Err(ToolError::InvalidArguments("Postal code is required.".into()));
        }

        let payload = self
            .client
            .current_by_postal_code(postal_code)
            .await
            .map_err(|e| {
                error!(error = %e, "weather lookup failed");
                ToolError::from(e)
            })?;

        flatten_payload(postal_code, payload).map_err(|e| {
            error!(error = %e, "weather payload missing expected fields");
            ToolError::MalformedPayload(e)
        })
    }
}

#[async_trait]
impl ToolServer for WeatherTools {
    fn server_name(&self) -> &'static str {
        WEATHER_SERVER_NAME
    }

    fn tools(&self) -> Value {
        json!({
            "tools": [{
                "name": GET_WEATHER_TOOL,
                "description": "Retrieves the current weather observation for a given postal code using api.weatherapi.com.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "postalCode": {
                            "type": "string",
                            "description": "Postal code value to search by"
                        }
                    },
                    "required": ["postalCode"],
                    "additionalProperties": false
                }
            }]
        })
    }

    async fn call_tool(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        match name {
            GET_WEATHER_TOOL => {
                let input: GetWeatherByPostalCodeInput = serde_json::from_value(args)
                    .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
                info!("GetWeatherByPostalCode");

                let weather = self.get_weather_by_postal_code(&input.postal_code).await?;
                let structured = serde_json::to_value(&weather)
                    .map_err(ToolError::MalformedPayload)?;
                Ok(structured_result(structured))
            }
            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_payload() -> Value {
        json!({
            "location": { "name": "Green Bay", "region": "Wisconsin", "country": "USA" },
            "current": {
                "temp_f": 48.2,
                "wind_mph": 11.9,
                "humidity": 70,
                "condition": { "text": "Partly cloudy", "code": 1003 }
            }
        })
    }

    #[test]
    fn flattens_all_six_fields() {
        let weather = flatten_payload("54304", provider_payload()).unwrap();

        assert_eq!(weather.location_name, "Green Bay");
        assert_eq!(weather.location_region, "Wisconsin");
        assert_eq!(weather.postal_code, "54304");
        assert_eq!(weather.temp, 48.2);
        assert_eq!(weather.wind, 11.9);
        assert_eq!(weather.condition_description, "Partly cloudy");

        let json = serde_json::to_value(&weather).unwrap();
        assert!(json["temp"].is_f64());
        assert!(json["wind"].is_f64());
        assert_eq!(json["conditionDescription"], "Partly cloudy");
    }

    #[test]
    fn missing_temperature_fails() {
        let mut payload = provider_payload();
        payload["current"].as_object_mut().unwrap().remove("temp_f");
        assert!(flatten_payload("54304", payload).is_err());
    }

    #[test]
    fn null_text_fields_become_empty() {
        let mut payload = provider_payload();
        payload["location"]["name"] = Value::Null;
        payload["current"]["condition"]["text"] = Value::Null;

        let weather = flatten_payload("54304", payload).unwrap();
        assert_eq!(weather.location_name, "");
        assert_eq!(weather.location_region, "Wisconsin");
        assert_eq!(weather.condition_description, "");
    }

    #[test]
    fn missing_region_fails() {
        let mut payload = provider_payload();
        payload["location"].as_object_mut().unwrap().remove("region");
        assert!(flatten_payload("54304", payload).is_err());
    }

    #[test]
    fn string_temperature_fails() {
        let mut payload = provider_payload();
        payload["current"]["temp_f"] = json!("48.2");
        assert!(flatten_payload("54304", payload).is_err());
    }
}
