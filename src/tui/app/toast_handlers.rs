//! Toast notification handlers.
//!
//! Showing a toast arms a one-shot timer command. When the timer fires it
//! sends `ToastExpired` with the generation it was armed for, which only
//! dismisses that same toast.

use std::any::Any;
use std::time::Duration;

use bubbletea_rs::Cmd;

use super::TravelApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::Severity;

impl TravelApp {
    /// Shows a toast and returns the command that will dismiss it.
    pub(super) fn show_toast(&mut self, message: impl Into<String>, severity: Severity) -> Cmd {
        let generation = self.toast.show(message, severity);
        Self::arm_toast_timer(self.toast_duration, generation)
    }

    /// Creates a command that emits `ToastExpired` after `delay`.
    pub(super) fn arm_toast_timer(delay: Duration, generation: u64) -> Cmd {
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Some(Box::new(AppMsg::ToastExpired { generation }) as Box<dyn Any + Send>)
        })
    }

    /// Dismisses the toast if the timer belongs to it.
    pub(super) fn handle_toast_expired(&mut self, generation: u64) -> Option<Cmd> {
        if !self.toast.expire(generation) {
            tracing::debug!("ignored stale toast expiry for generation {generation}");
        }
        None
    }
}
