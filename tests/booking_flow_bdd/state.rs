//! Scenario state for booking flow BDD tests.

use std::sync::Arc;

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wayfarer::telemetry::test_support::RecordingTelemetrySink;
use wayfarer::tui::TravelApp;

/// State shared across steps in a booking scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct BookingState {
    /// The TUI application model under test.
    pub(crate) app: Slot<TravelApp>,
    /// Recording telemetry sink for capturing events.
    pub(crate) telemetry_sink: Slot<Arc<RecordingTelemetrySink>>,
}
