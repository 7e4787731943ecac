//! Interactive travel booking mode.
//!
//! Resolves startup settings from configuration, selects a telemetry sink and
//! runs the bubbletea-rs program.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use wayfarer::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use wayfarer::tui::{StartupSettings, TravelApp, set_startup_settings, set_telemetry_sink};
use wayfarer::{WayfarerConfig, WayfarerError};

/// Runs the travel booking TUI.
///
/// # Errors
///
/// Returns an error if:
/// - The configured start page is not recognised
/// - The TUI fails to initialise or exits abnormally
pub async fn run(config: &WayfarerConfig) -> Result<(), WayfarerError> {
    let settings = StartupSettings::from_config(config)?;

    // Model::init() reads both values from module-level storage. If already
    // set, the existing values remain.
    let _ = set_startup_settings(settings);
    let _ = set_telemetry_sink(telemetry_sink(config.telemetry));

    run_tui().await
}

fn telemetry_sink(enabled: bool) -> Arc<dyn TelemetrySink> {
    if enabled {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}

/// Runs the bubbletea-rs program with the `TravelApp` model.
async fn run_tui() -> Result<(), WayfarerError> {
    let program = Program::<TravelApp>::builder()
        .alt_screen(true)
        .build()
        .map_err(|error| terminal_error(&error))?;

    program
        .run()
        .await
        .map_err(|error| terminal_error(&error))?;

    flush_output(&mut io::stdout())
}

fn terminal_error(error: &bubbletea_rs::Error) -> WayfarerError {
    WayfarerError::Terminal {
        message: error.to_string(),
    }
}

/// Flushes whatever the program left buffered once the alternate screen
/// closes.
fn flush_output(out: &mut impl Write) -> Result<(), WayfarerError> {
    out.flush()?;
    Ok(())
}
