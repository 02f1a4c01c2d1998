//! The search pipeline: geocode a city, then fetch current weather for
//! the resolved coordinates.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::LookupError;
use crate::geocode::GeocodeClient;
use crate::meteo::OpenMeteoClient;
use crate::model::{CityQuery, Coordinates, CurrentWeather, WeatherReport};

/// Resolves a city name to coordinates.
#[async_trait]
pub trait GeocodeService: Send + Sync + Debug {
    async fn resolve(&self, city: &CityQuery) -> Result<Coordinates, LookupError>;
}

/// Fetches current weather for coordinates.
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    async fn current(&self, coords: Coordinates) -> Result<CurrentWeather, LookupError>;
}

/// Drives one search: geocode, then weather, strictly in that order.
///
/// The weather service is only consulted after geocoding succeeds, so a
/// failed geocode is observable as the absence of any weather request.
/// Each call runs to completion independently; nothing here coordinates
/// overlapping searches.
#[derive(Debug)]
pub struct WeatherLookup {
    geocoder: Box<dyn GeocodeService>,
    weather: Box<dyn WeatherService>,
}

impl WeatherLookup {
    pub fn new(geocoder: Box<dyn GeocodeService>, weather: Box<dyn WeatherService>) -> Self {
        Self { geocoder, weather }
    }

    /// Wire up the two real HTTP clients.
    pub fn over_http() -> Result<Self, LookupError> {
        Ok(Self::new(
            Box::new(GeocodeClient::new()?),
            Box::new(OpenMeteoClient::new()?),
        ))
    }

    pub async fn search(&self, city: &CityQuery) -> Result<WeatherReport, LookupError> {
        let coords = self.geocoder.resolve(city).await?;
        let current = self.weather.current(coords).await?;

        Ok(WeatherReport { city: city.as_str().to_string(), current })
    }
}
