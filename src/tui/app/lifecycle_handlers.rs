//! Lifecycle and window handlers for the Wayfarer TUI.
//!
//! This module handles startup initialisation, terminal resize events,
//! toast expiry and high-level lifecycle messages such as quit and help
//! toggling.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::TravelApp;
use crate::tui::messages::AppMsg;

impl TravelApp {
    /// Dispatches lifecycle, notification and window messages.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.view.show_help = !self.view.show_help;
                None
            }
            AppMsg::ToastExpired { generation } => self.handle_toast_expired(*generation),
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                // Unreachable: caller routes every other group first.
                None
            }
        }
    }

    /// Handles the synthetic startup message.
    ///
    /// Subsequent `Initialized` messages are ignored.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if !self.has_initialized {
            self.has_initialized = true;
            tracing::debug!("wayfarer started on the {} page", self.view.page);
        }
        None
    }

    const fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        None
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first render cycle without
    /// waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
