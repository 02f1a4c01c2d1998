//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Shared domain models (city query, coordinates, current weather)
//! - Clients for the two upstream providers (geocode.xyz, Open-Meteo)
//! - The search pipeline that chains them
//! - UI state and a pure renderer
//!
//! It is used by `cityweather-cli`, but can also be reused by other
//! binaries or services.

pub mod error;
pub mod geocode;
pub mod icon;
pub mod lookup;
pub mod meteo;
pub mod model;
pub mod ui;

pub use error::LookupError;
pub use geocode::GeocodeClient;
pub use icon::WeatherIcon;
pub use lookup::{GeocodeService, WeatherLookup, WeatherService};
pub use meteo::OpenMeteoClient;
pub use model::{CityQuery, Coordinates, CurrentWeather, WeatherReport};
pub use ui::{UiState, render};

// Re-exported so callers and tests can build `with_base_url` arguments
// without naming the url crate themselves.
pub use url::Url;
