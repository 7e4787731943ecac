//! Scenario state for filter result BDD tests.

use std::sync::Arc;

use chrono::NaiveDate;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wayfarer::telemetry::test_support::RecordingTelemetrySink;
use wayfarer::tui::TravelApp;
use wayfarer::tui::messages::AppMsg;
use wayfarer::tui::state::Page;

/// State shared across steps in a filter scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct FilterState {
    /// The TUI application model under test.
    pub(crate) app: Slot<TravelApp>,
    /// Recording telemetry sink for capturing events.
    pub(crate) telemetry_sink: Slot<Arc<RecordingTelemetrySink>>,
}

/// Builds an app pinned to `today`, wired to the recording sink if present.
pub(crate) fn travel_app(today: NaiveDate, sink: Option<Arc<RecordingTelemetrySink>>) -> TravelApp {
    let app = TravelApp::default().with_today(today);
    match sink {
        Some(recording) => app.with_telemetry(recording),
        None => app,
    }
}

/// Types a quick search into the home page form and submits it.
pub(crate) fn submit_search(app: &mut TravelApp, from: &str, to: &str, departure: &str) {
    app.handle_message(&AppMsg::ShowPage(Page::Home));
    app.handle_message(&AppMsg::BeginEditing);
    for (index, text) in [from, to, departure].into_iter().enumerate() {
        if index > 0 {
            app.handle_message(&AppMsg::NextField);
        }
        for ch in text.chars() {
            app.handle_message(&AppMsg::InsertChar(ch));
        }
    }
    app.handle_message(&AppMsg::SubmitForm);
}
