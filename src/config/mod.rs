//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.wayfarer.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `WAYFARER_START_PAGE`,
//!    `WAYFARER_MAX_PRICE_CEILING`, `WAYFARER_PRICE_STEP`,
//!    `WAYFARER_TOAST_SECONDS`
//! 4. **Command-line arguments** – `--start-page`/`-p` and friends
//!
//! # Configuration File
//!
//! ```toml
//! start_page = "packages"
//! max_price_ceiling = 5000
//! price_step = 100
//! toast_seconds = 3
//! telemetry = false
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::WayfarerError;
use crate::tui::state::Page;

const DEFAULT_MAX_PRICE_CEILING: u32 = 5000;
const DEFAULT_PRICE_STEP: u32 = 100;
const DEFAULT_TOAST_SECONDS: u64 = 3;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use wayfarer::WayfarerConfig;
///
/// let config = WayfarerConfig::load().expect("failed to load configuration");
/// let page = config.resolve_start_page().expect("start page should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "WAYFARER",
    discovery(
        dotfile_name = ".wayfarer.toml",
        config_file_name = "wayfarer.toml",
        app_name = "wayfarer"
    )
)]
pub struct WayfarerConfig {
    /// Page shown when the application starts.
    ///
    /// One of `home`, `search`, `packages`, `bookings` or `contact`.
    /// Defaults to `home`.
    ///
    /// Can be provided via:
    /// - CLI: `--start-page <PAGE>` or `-p <PAGE>`
    /// - Environment: `WAYFARER_START_PAGE`
    /// - Config file: `start_page = "..."`
    #[ortho_config(cli_short = 'p')]
    pub start_page: Option<String>,

    /// Upper end of the price slider, which is also its starting value.
    ///
    /// Defaults to 5000.
    #[ortho_config()]
    pub max_price_ceiling: u32,

    /// Amount the price slider moves per key press.
    ///
    /// Zero is treated as one. Defaults to 100.
    #[ortho_config()]
    pub price_step: u32,

    /// Seconds a notification stays visible.
    ///
    /// Defaults to 3.
    #[ortho_config()]
    pub toast_seconds: u64,

    /// Writes telemetry events to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry` / `-T`
    /// - Config file: `telemetry = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so there is no `WAYFARER_TELEMETRY`.
    #[ortho_config(cli_short = 'T')]
    pub telemetry: bool,
}

impl Default for WayfarerConfig {
    fn default() -> Self {
        Self {
            start_page: None,
            max_price_ceiling: DEFAULT_MAX_PRICE_CEILING,
            price_step: DEFAULT_PRICE_STEP,
            toast_seconds: DEFAULT_TOAST_SECONDS,
            telemetry: false,
        }
    }
}

impl WayfarerConfig {
    /// Resolves the configured start page.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::UnknownPage`] when `start_page` does not name
    /// a known page.
    pub fn resolve_start_page(&self) -> Result<Page, WayfarerError> {
        self.start_page
            .as_deref()
            .map_or(Ok(Page::Home), str::parse)
    }

    /// Returns the price slider step, never zero.
    #[must_use]
    pub const fn normalised_price_step(&self) -> u32 {
        if self.price_step == 0 {
            1
        } else {
            self.price_step
        }
    }

    /// Returns how long notifications stay visible.
    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }
}

#[cfg(test)]
mod tests;
