//! `Model` trait implementation for the Wayfarer TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `TravelApp`, handling initialisation, update dispatch and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use crossterm::event::{KeyCode, KeyModifiers};

use super::TravelApp;
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;

impl Model for TravelApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve resolved settings from module-level storage
        let settings = crate::tui::get_startup_settings();
        let (width, height) = crate::tui::get_initial_terminal_size();
        let model = Self::new(settings)
            .with_telemetry(crate::tui::get_telemetry_sink())
            .with_dimensions(width, height);

        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs with context-aware mapping
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.view.show_help {
                let action = if is_interrupt(key_msg) {
                    AppMsg::Quit
                } else {
                    AppMsg::ToggleHelp
                };
                return self.handle_message(&action);
            }
            let mapped = map_key_to_message_with_context(key_msg, self.input_context());
            return mapped.and_then(|app_msg| self.handle_message(&app_msg));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.view.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_nav_bar());
        output.push('\n');
        output.push_str(&self.render_body());
        output.push_str(&self.render_toast_line());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

/// Returns true for Ctrl+C, which quits even over the help overlay.
fn is_interrupt(key: &bubbletea_rs::event::KeyMsg) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char('c')
}

impl TravelApp {
    /// Returns the current input context for context-aware key mapping.
    pub(crate) const fn input_context(&self) -> InputContext {
        if self.view.is_editing() {
            InputContext::Editing
        } else {
            InputContext::Browse(self.view.page)
        }
    }
}
