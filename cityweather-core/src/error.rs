use thiserror::Error;

/// Everything that can go wrong during one search.
///
/// The `Display` text of each variant is the user-facing message; the
/// transport and parse variants all collapse into the same generic line,
/// with the underlying cause preserved via `source()` for logging.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Blank input, rejected before any network call.
    #[error("Please enter a city.")]
    EmptyInput,

    /// The geocoding provider reported an error or returned unusable
    /// coordinates.
    #[error("City not found.")]
    CityNotFound,

    /// The weather provider answered without a current-weather payload.
    #[error("Could not retrieve weather data.")]
    WeatherUnavailable,

    /// A request failed in transit.
    #[error("An error occurred. Please try again later.")]
    Upstream(#[from] reqwest::Error),

    /// A response body was not the JSON we expected.
    #[error("An error occurred. Please try again later.")]
    Malformed(#[from] serde_json::Error),

    /// An endpoint URL could not be built.
    #[error("An error occurred. Please try again later.")]
    BadEndpoint(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn user_messages_match_the_four_surfaced_lines() {
        assert_eq!(LookupError::EmptyInput.to_string(), "Please enter a city.");
        assert_eq!(LookupError::CityNotFound.to_string(), "City not found.");
        assert_eq!(
            LookupError::WeatherUnavailable.to_string(),
            "Could not retrieve weather data."
        );
    }

    #[test]
    fn parse_failures_surface_the_generic_message_and_keep_the_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = LookupError::from(cause);
        assert_eq!(err.to_string(), "An error occurred. Please try again later.");
        assert!(err.source().is_some());
    }
}
