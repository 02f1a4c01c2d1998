//! Explicit UI state and a pure renderer.
//!
//! State transitions are decided by the caller; rendering only turns a
//! state into text. Transitions per search are strictly
//! Idle → Loading → (Result | Error), except that input validation
//! failures render an Error without ever entering Loading.

use crate::icon::WeatherIcon;
use crate::model::WeatherReport;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Result(WeatherReport),
    Error(String),
}

/// Render a state as terminal text. Pure; no output side effects.
pub fn render(state: &UiState) -> String {
    match state {
        UiState::Idle => String::new(),
        UiState::Loading => "Looking up the weather...".to_string(),
        UiState::Error(message) => message.clone(),
        UiState::Result(report) => {
            let icon = WeatherIcon::from_code(report.current.weathercode);
            let mut out = format!(
                "{city}\n{glyph}  {name}\nTemperature: {temp}°C\nCondition: {code}\nWind speed: {wind} km/h",
                city = report.city,
                glyph = icon.glyph(),
                name = icon.name(),
                temp = report.current.temperature,
                code = report.current.weathercode,
                wind = report.current.windspeed,
            );
            if let Some(observed_at) = report.current.observed_at {
                out.push_str(&format!("\nObserved at: {}", observed_at.format("%Y-%m-%d %H:%M")));
            }
            out
        }
    }
}
