//! Current weather via the Open-Meteo forecast API. Free, no API key.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::LookupError;
use crate::lookup::WeatherService;
use crate::model::{Coordinates, CurrentWeather};

const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com";

/// Client for `GET {base}/v1/forecast?latitude=..&longitude=..&current_weather=true`.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    base_url: Url,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self, LookupError> {
        Ok(Self::with_base_url(Url::parse(OPEN_METEO_BASE_URL)?))
    }

    /// Point the client at a different base URL. Used by tests.
    pub fn with_base_url(base_url: Url) -> Self {
        Self { http: Client::new(), base_url }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeatherPayload>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherPayload {
    temperature: f64,
    weathercode: i32,
    windspeed: f64,
    /// ISO 8601 to the minute, e.g. "2026-08-27T14:00".
    time: Option<String>,
}

fn parse_observation_time(raw: Option<&str>) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw?, "%Y-%m-%dT%H:%M").ok()
}

#[async_trait]
impl WeatherService for OpenMeteoClient {
    async fn current(&self, coords: Coordinates) -> Result<CurrentWeather, LookupError> {
        let url = self.base_url.join("/v1/forecast")?;
        tracing::debug!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            "current weather request"
        );

        let res = self
            .http
            .get(url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?;

        let body = res.text().await?;
        let parsed: ForecastResponse = serde_json::from_str(&body)?;

        let Some(payload) = parsed.current_weather else {
            tracing::warn!("weather response lacked a current_weather payload");
            return Err(LookupError::WeatherUnavailable);
        };

        Ok(CurrentWeather {
            temperature: payload.temperature,
            weathercode: payload.weathercode,
            windspeed: payload.windspeed,
            observed_at: parse_observation_time(payload.time.as_deref()),
        })
    }
}
