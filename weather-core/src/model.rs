use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Unit system requested from the provider and used for display labels.
///
/// Purely a request parameter and label mapping; the provider returns values
/// already in the requested system, no conversion happens locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "m")]
    Metric,
    #[serde(rename = "f")]
    Imperial,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Metric => "m",
            Unit::Imperial => "f",
        }
    }

    pub fn toggled(&self) -> Unit {
        match self {
            Unit::Metric => Unit::Imperial,
            Unit::Imperial => Unit::Metric,
        }
    }

    /// Temperature suffix, e.g. `13°C`.
    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Unit::Metric => "°C",
            Unit::Imperial => "°F",
        }
    }

    /// Wind speed label, e.g. `15 Kilometers/Hour`.
    pub fn speed_label(&self) -> &'static str {
        match self {
            Unit::Metric => "Kilometers/Hour",
            Unit::Imperial => "Miles/Hour",
        }
    }

    /// Label for the action that switches away from this unit.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Unit::Metric => "To Fahrenheit",
            Unit::Imperial => "To Celsius",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Unit::Metric, Unit::Imperial]
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown unit '{0}'. Supported units: m (metric), f (imperial).")]
pub struct ParseUnitError(String);

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Unit::Metric),
            "f" => Ok(Unit::Imperial),
            other => Err(ParseUnitError(other.to_string())),
        }
    }
}

/// Echo of the query as the provider understood it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEcho {
    #[serde(rename = "type")]
    pub kind: String,
    pub query: String,
    pub language: String,
    pub unit: Unit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub region: String,
    pub lat: String,
    pub lon: String,
    pub timezone_id: String,
    pub localtime: String,
    pub localtime_epoch: i64,
    pub utc_offset: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub observation_time: String,
    pub temperature: f64,
    pub weather_code: u32,
    pub weather_icons: Vec<String>,
    pub weather_descriptions: Vec<String>,
    pub wind_speed: f64,
    pub wind_degree: u16,
    pub wind_dir: String,
    pub pressure: f64,
    pub precip: f64,
    pub humidity: u8,
    pub cloudcover: u8,
    pub feelslike: f64,
    pub uv_index: f64,
    pub visibility: f64,
    pub is_day: String,
}

/// Successful provider payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub request: RequestEcho,
    pub location: Location,
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderError {
    pub code: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub info: String,
}

/// Logical failure payload. The provider reports these with HTTP 200; the
/// failure is signaled in-body by the `success` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderFailure {
    pub success: bool,
    pub error: ProviderError,
}

/// Either shape the provider can return for a current-weather request.
///
/// Discriminated by body shape: a failure body carries `success` and `error`
/// and nothing else, a success body carries the three data blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeatherReport {
    Current(CurrentWeather),
    Failure(ProviderFailure),
}
