//! Filter message handlers for the Wayfarer TUI.
//!
//! Every control change re-runs the filter engine over the current results,
//! keeps the cursor within the shrunken list and records a telemetry event.

use bubbletea_rs::Cmd;

use super::TravelApp;
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

impl TravelApp {
    /// Dispatches filter messages to their handlers.
    pub(super) fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RaisePrice => self.controls.price.raise(),
            AppMsg::LowerPrice => self.controls.price.lower(),
            AppMsg::SetMaxPrice(value) => self.controls.price.set(*value),
            AppMsg::CycleDuration => self.controls.cycle_duration(),
            AppMsg::CycleCategory => self.controls.cycle_category(),
            AppMsg::SetDuration(bucket) => self.controls.duration = *bucket,
            AppMsg::SetCategory(category) => self.controls.category = *category,
            AppMsg::ClearFilters => self.controls.reset(),
            _ => {
                debug_assert!(false, "non-filter message routed to handle_filter_msg");
                return None;
            }
        }
        self.apply_filters();
        None
    }

    /// Re-runs the filter engine after a control change.
    fn apply_filters(&mut self) {
        self.rebuild_filter_cache();
        let criteria = self.controls.criteria();
        tracing::debug!(
            "filters applied ({}): {} of {} offers visible",
            criteria.label(),
            self.filtered_count(),
            self.offers.len()
        );
        self.telemetry.record(TelemetryEvent::FiltersApplied {
            visible: self.filtered_count(),
            total: self.offers.len(),
        });
    }
}
