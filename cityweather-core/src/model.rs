use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// A validated city query: trimmed and guaranteed non-empty.
///
/// Parsing happens before any client is touched, so a blank input can
/// never reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    pub fn parse(input: &str) -> Result<Self, LookupError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LookupError::EmptyInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coordinates resolved by the geocoding provider. Created per search,
/// never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions as reported by the weather provider.
///
/// Temperature is in °C, wind speed in km/h. `weathercode` is the
/// provider's WMO code; see [`crate::icon::WeatherIcon`] for the mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weathercode: i32,
    pub windspeed: f64,
    /// Observation timestamp, when the provider supplies one.
    pub observed_at: Option<NaiveDateTime>,
}

/// The product of one successful search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// The city as the user entered it (trimmed), echoed back verbatim.
    pub city: String,
    pub current: CurrentWeather,
}
