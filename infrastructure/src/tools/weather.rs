//! get_current_weather executor: current conditions for a location
//!
//! Runs inside the broker's trusted boundary. Receives the validated
//! arguments and the `api_key` secret resolved for this call; the key is
//! sent upstream and never included in the result. Without a key (tool
//! configured secret-less) the executor answers from deterministic mock
//! data, and a failing live call falls back to the same data labelled as
//! cached.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use vaultgate_application::ToolExecutor;
use vaultgate_domain::{ResolvedSecrets, ToolError, ToolResult, ValidatedCall};

/// Executor binding name
pub const GET_CURRENT_WEATHER: &str = "get_current_weather";

/// Timeout for the upstream weather API request
const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const OPENWEATHERMAP_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Weather lookup backed by OpenWeatherMap.
pub struct WeatherExecutor {
    client: reqwest::Client,
}

impl WeatherExecutor {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(API_REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }

    async fn live_weather(
        &self,
        location: &str,
        format: &str,
        api_key: &str,
    ) -> Result<serde_json::Value, String> {
        let units = if format == "fahrenheit" {
            "imperial"
        } else {
            "metric"
        };

        let response = self
            .client
            .get(OPENWEATHERMAP_URL)
            .query(&[("q", location), ("appid", api_key), ("units", units)])
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status.as_u16()));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("invalid response body: {}", e))?;

        let temp = data["main"]["temp"].as_f64().ok_or("missing temperature")?;
        let condition = data["weather"][0]["description"]
            .as_str()
            .unwrap_or("unknown");
        let humidity = data["main"]["humidity"].as_u64().unwrap_or(0);
        let unit = if format == "fahrenheit" { "°F" } else { "°C" };

        Ok(serde_json::json!({
            "location": data["name"].as_str().unwrap_or(location),
            "temperature": format!("{}{}", temp, unit),
            "condition": condition,
            "humidity": format!("{}%", humidity),
            "source": "openweathermap",
        }))
    }
}

impl Default for WeatherExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutor for WeatherExecutor {
    fn name(&self) -> &str {
        GET_CURRENT_WEATHER
    }

    async fn execute(&self, call: &ValidatedCall, secrets: &ResolvedSecrets) -> ToolResult {
        let location = match call.require_string("location") {
            Ok(location) => location,
            Err(message) => {
                return ToolResult::failure(call.name(), ToolError::execution_failed(message));
            }
        };
        let format = call.get_string("format").unwrap_or("celsius");

        let Some(api_key) = secrets.get("api_key") else {
            debug!(tool = %call.name(), "no api_key configured, answering from mock data");
            return mock_result(call.name(), location, format, None);
        };

        match self.live_weather(location, format, api_key).await {
            Ok(payload) => ToolResult::success(call.name(), payload.to_string()),
            Err(reason) => {
                debug!(tool = %call.name(), %reason, "weather API unavailable, using mock data");
                mock_result(
                    call.name(),
                    location,
                    format,
                    Some("Weather API unavailable, using cached data."),
                )
            }
        }
    }
}

/// Deterministic weather data keyed by city, mirroring the live payload
/// shape.
fn mock_result(tool_name: &str, location: &str, format: &str, prefix: Option<&str>) -> ToolResult {
    let city = location
        .split(',')
        .next()
        .unwrap_or(location)
        .trim()
        .to_lowercase();

    let (temp_c, condition) = match city.as_str() {
        "paris" => (12, "cloudy"),
        "london" => (8, "rainy"),
        "tokyo" => (18, "sunny"),
        "new york" => (5, "windy"),
        "san francisco" => (15, "foggy"),
        _ => (20, "partly cloudy"),
    };

    let (temp, unit) = if format == "fahrenheit" {
        (temp_c * 9 / 5 + 32, "°F")
    } else {
        (temp_c, "°C")
    };

    let payload = serde_json::json!({
        "location": location,
        "temperature": format!("{}{}", temp, unit),
        "condition": condition,
        "source": "mock_data",
    });

    let content = match prefix {
        Some(prefix) => format!("{} {}", prefix, payload),
        None => payload.to_string(),
    };
    ToolResult::success(tool_name, content)
}
