//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for
//! Wayfarer. It owns the offer collection, filter controls, bookings, session
//! and forms, and re-runs the filter engine whenever the controls or the
//! result set change.
//!
//! # Module Structure
//!
//! - `navigation`: page activation and list cursors
//! - `filter_handlers`: filter control changes
//! - `form_handlers`: form editing and submission
//! - `modal_handlers`: login and booking modals
//! - `toast_handlers`: notifications and their expiry timers
//! - `lifecycle_handlers`: startup, help, quit and resize
//! - `model_impl`: the `bubbletea_rs::Model` implementation
//! - `rendering`: view rendering methods for terminal output

use std::sync::Arc;
use std::time::Duration;

use bubbletea_rs::Cmd;
use chrono::{NaiveDate, Utc};

use crate::bookings::BookingLedger;
use crate::catalogue::{TravelPackage, TripOffer, matching_indices, sample};
use crate::session::Session;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::messages::AppMsg;
use super::state::{FilterControls, FormState, ListCursor, Modal, Page, Toast, ToastState, ViewState};
use super::storage::StartupSettings;

mod filter_handlers;
mod form_handlers;
mod lifecycle_handlers;
mod modal_handlers;
mod model_impl;
mod navigation;
mod rendering;
mod toast_handlers;

/// Rows reserved for header, navigation bar, separator, toast and status bar.
const CHROME_HEIGHT: usize = 5;

/// Main application model for the Wayfarer TUI.
#[derive(Debug)]
pub struct TravelApp {
    /// Current unfiltered result set.
    pub(crate) offers: Vec<TripOffer>,
    /// Cached indices of offers matching the current filter controls.
    /// Invalidated when the offers or the controls change.
    filtered_indices: Vec<usize>,
    /// Price slider and select values.
    pub(crate) controls: FilterControls,
    /// Cursor over the filtered results.
    pub(crate) results_cursor: ListCursor,
    /// Package listing, loaded when the packages page is first shown.
    packages: Option<Vec<TravelPackage>>,
    /// Cursor over the package listing.
    pub(crate) packages_cursor: ListCursor,
    /// Bookings made this session.
    bookings: BookingLedger,
    /// Simulated sign-in state.
    session: Session,
    /// Active page, modal and overlay.
    pub(crate) view: ViewState,
    /// Home page quick search form.
    pub(crate) search_form: FormState,
    /// Contact page form.
    pub(crate) contact_form: FormState,
    /// Visible notification.
    toast: ToastState,
    /// How long notifications stay visible.
    toast_duration: Duration,
    /// Day used to validate departure dates and prefill bookings.
    today: NaiveDate,
    /// Destination for telemetry events.
    telemetry: Arc<dyn TelemetrySink>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether the startup message has been handled.
    has_initialized: bool,
}

impl Default for TravelApp {
    fn default() -> Self {
        Self::new(StartupSettings::default())
    }
}

impl TravelApp {
    /// Creates an application seeded with the startup sample offers.
    #[must_use]
    pub fn new(settings: StartupSettings) -> Self {
        let mut app = Self {
            offers: sample::startup_offers(),
            filtered_indices: Vec::new(),
            controls: FilterControls::new(settings.max_price_ceiling, settings.price_step),
            results_cursor: ListCursor::default(),
            packages: None,
            packages_cursor: ListCursor::default(),
            bookings: BookingLedger::new(),
            session: Session::new(),
            view: ViewState::showing(settings.start_page),
            search_form: FormState::quick_search(),
            contact_form: FormState::contact(),
            toast: ToastState::default(),
            toast_duration: settings.toast_duration,
            today: Utc::now().date_naive(),
            telemetry: Arc::new(NoopTelemetrySink),
            width: 80,
            height: 24,
            has_initialized: false,
        };
        app.rebuild_filter_cache();
        app.activate_page(settings.start_page);
        app
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    /// Fixes the day used for date validation and booking defaults.
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Sets the terminal dimensions used for rendering.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the unfiltered result set.
    #[must_use]
    pub fn offers(&self) -> &[TripOffer] {
        &self.offers
    }

    /// Returns the offers matching the current filter controls, in result
    /// order.
    #[must_use]
    pub fn filtered_offers(&self) -> Vec<&TripOffer> {
        self.filtered_indices
            .iter()
            .filter_map(|&index| self.offers.get(index))
            .collect()
    }

    /// Returns the count of filtered offers.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the filter control values.
    #[must_use]
    pub const fn controls(&self) -> &FilterControls {
        &self.controls
    }

    /// Returns the cursor position within the filtered results.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.results_cursor.position()
    }

    /// Returns the offer under the results cursor, if any.
    #[must_use]
    pub fn selected_offer(&self) -> Option<&TripOffer> {
        self.filtered_indices
            .get(self.results_cursor.position())
            .and_then(|&index| self.offers.get(index))
    }

    /// Returns the package listing once it has been loaded.
    #[must_use]
    pub fn packages(&self) -> Option<&[TravelPackage]> {
        self.packages.as_deref()
    }

    /// Returns the package under the packages cursor, if loaded.
    #[must_use]
    pub fn selected_package(&self) -> Option<&TravelPackage> {
        self.packages
            .as_ref()
            .and_then(|packages| packages.get(self.packages_cursor.position()))
    }

    /// Returns the booking ledger.
    #[must_use]
    pub const fn bookings(&self) -> &BookingLedger {
        &self.bookings
    }

    /// Returns the sign-in state.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the active page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.view.page
    }

    /// Returns the open modal, if any.
    #[must_use]
    pub const fn modal(&self) -> Option<&Modal> {
        self.view.modal.as_ref()
    }

    /// Returns true when key presses edit a form.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.view.is_editing()
    }

    /// Returns true when the help overlay is visible.
    #[must_use]
    pub const fn show_help(&self) -> bool {
        self.view.show_help
    }

    /// Returns the visible toast, if any.
    #[must_use]
    pub const fn toast(&self) -> Option<&Toast> {
        self.toast.current()
    }

    /// Rebuilds the filtered indices cache from the current controls.
    ///
    /// Call this after replacing `offers` or changing the controls.
    pub(crate) fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = matching_indices(&self.offers, &self.controls.criteria());
        self.results_cursor.clamp(self.filtered_count());
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. While a modal is open,
    /// navigation and filter messages are ignored.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.view.modal.is_some() && (msg.is_navigation() || msg.is_filter()) {
            return None;
        }
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        if msg.is_modal() {
            return self.handle_modal_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}
