//! Page activation and list cursor handlers.
//!
//! Activating a page runs its load step: the search page re-runs the filter
//! over the current results and the packages page loads the listing the
//! first time it is shown.

use bubbletea_rs::Cmd;

use super::TravelApp;
use crate::catalogue::sample;
use crate::tui::messages::AppMsg;
use crate::tui::state::Page;

impl TravelApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ShowPage(page) => self.handle_show_page(*page),
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
                None
            }
        }
    }

    fn handle_show_page(&mut self, page: Page) -> Option<Cmd> {
        self.view.editing = false;
        self.activate_page(page);
        None
    }

    /// Makes `page` visible and runs its load step.
    pub(super) fn activate_page(&mut self, page: Page) {
        self.view.page = page;
        match page {
            Page::Search => self.rebuild_filter_cache(),
            Page::Packages => {
                if self.packages.is_none() {
                    self.packages = Some(sample::packages());
                }
                self.packages_cursor.clamp(self.packages.as_ref().map_or(0, Vec::len));
            }
            Page::Home | Page::Bookings | Page::Contact => {}
        }
        tracing::debug!("page activated: {page}");
    }

    fn handle_cursor_up(&mut self) -> Option<Cmd> {
        match self.view.page {
            Page::Search => self.results_cursor.up(),
            Page::Packages => self.packages_cursor.up(),
            Page::Home | Page::Bookings | Page::Contact => {}
        }
        None
    }

    fn handle_cursor_down(&mut self) -> Option<Cmd> {
        match self.view.page {
            Page::Search => self.results_cursor.down(self.filtered_count()),
            Page::Packages => {
                let count = self.packages.as_ref().map_or(0, Vec::len);
                self.packages_cursor.down(count);
            }
            Page::Home | Page::Bookings | Page::Contact => {}
        }
        None
    }
}
