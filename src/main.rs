//! Wayfarer entrypoint for the terminal travel booking mockup.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use wayfarer::{WayfarerConfig, WayfarerError};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), WayfarerError> {
    let config = load_config()?;
    cli::travel_tui::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`WayfarerError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<WayfarerConfig, WayfarerError> {
    WayfarerConfig::load().map_err(|error| WayfarerError::Configuration {
        message: error.to_string(),
    })
}
