//! Mapping from WMO weather codes to display icons.
//!
//! The table is an exact-match lookup over the codes Open-Meteo actually
//! emits; anything else falls back to [`WeatherIcon::Question`]. There is
//! deliberately no range or nearest-match logic.

/// Symbolic icon for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sun,
    CloudSun,
    Cloud,
    Smog,
    CloudRain,
    CloudShowersHeavy,
    Snowflake,
    CloudBolt,
    /// Fallback for codes not in the table.
    Question,
}

impl WeatherIcon {
    /// See <https://open-meteo.com/en/docs#weathervariables> for the codes.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Sun,                     // clear sky
            1 | 2 => Self::CloudSun,            // mainly clear, partly cloudy
            3 => Self::Cloud,                   // overcast
            45 | 48 => Self::Smog,              // fog, depositing rime fog
            51 | 53 | 55 => Self::CloudRain,    // drizzle
            61 | 63 => Self::CloudRain,         // slight/moderate rain
            65 => Self::CloudShowersHeavy,      // heavy rain
            71 | 73 | 75 | 77 => Self::Snowflake,
            80 => Self::CloudRain,              // slight rain showers
            81 | 82 => Self::CloudShowersHeavy, // moderate/violent showers
            95 | 96 | 99 => Self::CloudBolt,    // thunderstorm
            _ => Self::Question,
        }
    }

    /// Stable symbolic identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::CloudSun => "cloud-sun",
            Self::Cloud => "cloud",
            Self::Smog => "smog",
            Self::CloudRain => "cloud-rain",
            Self::CloudShowersHeavy => "cloud-showers-heavy",
            Self::Snowflake => "snowflake",
            Self::CloudBolt => "cloud-bolt",
            Self::Question => "question",
        }
    }

    /// Glyph used by the terminal renderer.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Sun => "☀",
            Self::CloudSun => "⛅",
            Self::Cloud => "☁",
            Self::Smog => "🌫",
            Self::CloudRain => "🌦",
            Self::CloudShowersHeavy => "🌧",
            Self::Snowflake => "❄",
            Self::CloudBolt => "⛈",
            Self::Question => "?",
        }
    }
}
