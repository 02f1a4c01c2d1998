//! Forward geocoding via geocode.xyz. Free, no API key required.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::LookupError;
use crate::lookup::GeocodeService;
use crate::model::{CityQuery, Coordinates};

const GEOCODE_BASE_URL: &str = "https://geocode.xyz";

/// Client for `GET {base}/{city}?json=1`.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: Client,
    base_url: Url,
}

impl GeocodeClient {
    pub fn new() -> Result<Self, LookupError> {
        Ok(Self::with_base_url(Url::parse(GEOCODE_BASE_URL)?))
    }

    /// Point the client at a different base URL. Used by tests.
    pub fn with_base_url(base_url: Url) -> Self {
        Self { http: Client::new(), base_url }
    }

    /// Build the request URL. The city goes in as a single path segment,
    /// so it is percent-encoded as a whole (including any `/` or `?`).
    fn endpoint(&self, city: &CityQuery) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(city.as_str());
        }
        url.query_pairs_mut().append_pair("json", "1");
        url
    }
}

/// geocode.xyz serves coordinates as numbers or numeric strings,
/// depending on the endpoint mood of the day.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coord {
    Number(f64),
    Text(String),
}

impl Coord {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Coord::Number(n) => Some(*n),
            Coord::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    /// Present on any provider-side failure; the value itself is ignored.
    error: Option<serde_json::Value>,
    latt: Option<Coord>,
    longt: Option<Coord>,
}

#[async_trait]
impl GeocodeService for GeocodeClient {
    async fn resolve(&self, city: &CityQuery) -> Result<Coordinates, LookupError> {
        let url = self.endpoint(city);
        tracing::debug!(%url, "geocoding request");

        let res = self.http.get(url).send().await?;
        let body = res.text().await?;
        let parsed: GeocodeResponse = serde_json::from_str(&body)?;

        if parsed.error.is_some() {
            tracing::debug!(city = %city, "geocoding provider reported an error");
            return Err(LookupError::CityNotFound);
        }

        let latitude = parsed.latt.as_ref().and_then(Coord::as_f64);
        let longitude = parsed.longt.as_ref().and_then(Coord::as_f64);
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => {
                tracing::debug!(latitude, longitude, "geocoded");
                Ok(Coordinates { latitude, longitude })
            }
            _ => {
                tracing::warn!(city = %city, "geocoding response had unusable coordinates");
                Err(LookupError::CityNotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeocodeClient {
        GeocodeClient::new().expect("default base URL is valid")
    }

    #[test]
    fn endpoint_encodes_the_city_as_one_path_segment() {
        let city = CityQuery::parse("New York").unwrap();
        let url = client().endpoint(&city);
        assert_eq!(url.as_str(), "https://geocode.xyz/New%20York?json=1");
    }

    #[test]
    fn endpoint_encodes_path_and_query_metacharacters() {
        let city = CityQuery::parse("a/b?c").unwrap();
        let url = client().endpoint(&city);
        assert_eq!(url.path(), "/a%2Fb%3Fc");
        assert_eq!(url.query(), Some("json=1"));
    }

    #[test]
    fn coord_accepts_numbers_and_numeric_strings() {
        let n: Coord = serde_json::from_str("41.9").unwrap();
        let s: Coord = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(n.as_f64(), Some(41.9));
        assert_eq!(s.as_f64(), Some(12.5));

        let bad: Coord = serde_json::from_str("\"Throttled!\"").unwrap();
        assert_eq!(bad.as_f64(), None);
    }
}
