//! Startup context storage for the Wayfarer TUI.
//!
//! This module owns the global `OnceLock` values used during TUI bootstrapping
//! and provides the setter/getter functions consumed by the binary and by
//! `TravelApp::init()`. Only immutable startup values live here; all
//! application state is owned by the model.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crossterm::terminal;

use crate::config::WayfarerConfig;
use crate::error::WayfarerError;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::state::Page;

/// Global storage for startup settings.
///
/// This is set before the TUI program starts and read by `TravelApp::init()`.
static STARTUP_SETTINGS: OnceLock<StartupSettings> = OnceLock::new();

/// Global storage for telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Resolved settings the application starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupSettings {
    /// Page shown first.
    pub start_page: Page,
    /// Upper end of the price slider.
    pub max_price_ceiling: u32,
    /// Price slider step, never zero.
    pub price_step: u32,
    /// How long toasts stay visible.
    pub toast_duration: Duration,
}

impl Default for StartupSettings {
    fn default() -> Self {
        let config = WayfarerConfig::default();
        Self {
            start_page: Page::default(),
            max_price_ceiling: config.max_price_ceiling,
            price_step: config.normalised_price_step(),
            toast_duration: config.toast_duration(),
        }
    }
}

impl StartupSettings {
    /// Resolves startup settings from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::UnknownPage`] when the configured start page
    /// is not recognised.
    pub fn from_config(config: &WayfarerConfig) -> Result<Self, WayfarerError> {
        Ok(Self {
            start_page: config.resolve_start_page()?,
            max_price_ceiling: config.max_price_ceiling,
            price_step: config.normalised_price_step(),
            toast_duration: config.toast_duration(),
        })
    }
}

/// Sets the startup settings for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the settings were set, `false` if they were already set.
pub fn set_startup_settings(settings: StartupSettings) -> bool {
    STARTUP_SETTINGS.set(settings).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the startup settings, or defaults if none were set.
pub(crate) fn get_startup_settings() -> StartupSettings {
    STARTUP_SETTINGS.get().cloned().unwrap_or_default()
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Gets the current terminal dimensions, falling back to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    terminal::size()
        .ok()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
