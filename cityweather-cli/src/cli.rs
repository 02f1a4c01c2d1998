use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};

use cityweather_core::{CityQuery, UiState, WeatherLookup, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    /// With no subcommand, an interactive prompt loop starts.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Show {
        /// City name; multiple words are joined with spaces.
        #[arg(required = true)]
        city: Vec<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let lookup = WeatherLookup::over_http()?;

        match self.command {
            Some(Command::Show { city }) => {
                search_and_render(&lookup, &city.join(" ")).await;
            }
            None => {
                interactive_loop(&lookup).await?;
            }
        }

        Ok(())
    }
}

/// The prompt plays the role of the text field plus submit trigger.
/// Esc or Ctrl-C leaves the loop.
async fn interactive_loop(lookup: &WeatherLookup) -> anyhow::Result<()> {
    loop {
        let input = match Text::new("City:").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        search_and_render(lookup, &input).await;
    }

    Ok(())
}

/// Drive one search through its UI states and print each rendering.
///
/// Invalid input renders an error without ever entering Loading; a valid
/// search renders Loading before the first network call and exactly one
/// of Result/Error afterwards. A failed search is not a process failure.
async fn search_and_render(lookup: &WeatherLookup, input: &str) {
    let city = match CityQuery::parse(input) {
        Ok(city) => city,
        Err(err) => {
            println!("{}", render(&UiState::Error(err.to_string())));
            return;
        }
    };

    println!("{}", render(&UiState::Loading));

    let state = match lookup.search(&city).await {
        Ok(report) => UiState::Result(report),
        Err(err) => {
            tracing::debug!(error = ?err, "search failed");
            UiState::Error(err.to_string())
        }
    };

    println!("{}", render(&state));
}
