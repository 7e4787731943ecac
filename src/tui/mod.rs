//! Terminal User Interface for browsing, filtering and booking trips.
//!
//! This module provides an interactive TUI built on the bubbletea-rs
//! framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::TravelApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Page, filter, form and toast state
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Settings
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, resolved configuration is passed through module-level storage.
//! Call [`set_startup_settings`] (and optionally [`set_telemetry_sink`])
//! before starting the program, and `TravelApp::init()` will read them.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::TravelApp;
pub(crate) use storage::{get_initial_terminal_size, get_startup_settings, get_telemetry_sink};
pub use storage::{StartupSettings, set_startup_settings, set_telemetry_sink};
