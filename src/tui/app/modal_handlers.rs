//! Login and booking modal handlers.

use bubbletea_rs::Cmd;

use super::TravelApp;
use crate::bookings::BookingTarget;
use crate::tui::messages::AppMsg;
use crate::tui::state::{FormState, Modal, Page, Severity};

impl TravelApp {
    /// Dispatches modal messages to their handlers.
    pub(super) fn handle_modal_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenLogin => self.handle_open_login(),
            AppMsg::OpenBooking => self.handle_open_booking(),
            AppMsg::CloseModal => {
                self.view.modal = None;
                None
            }
            _ => {
                debug_assert!(false, "non-modal message routed to handle_modal_msg");
                None
            }
        }
    }

    fn handle_open_login(&mut self) -> Option<Cmd> {
        if self.view.modal.is_none() {
            self.view.editing = false;
            self.view.modal = Some(Modal::Login(FormState::login()));
        }
        None
    }

    /// Opens the booking modal for the selected offer or package.
    ///
    /// Shows an info toast when nothing is selected.
    fn handle_open_booking(&mut self) -> Option<Cmd> {
        if self.view.modal.is_some() {
            return None;
        }

        let Some(target) = self.booking_target() else {
            return Some(self.show_toast("Select a trip or package to book first", Severity::Info));
        };

        tracing::debug!("booking modal opened for {}", target.title);
        self.view.editing = false;
        self.view.modal = Some(Modal::Booking {
            target,
            form: FormState::booking(self.today),
        });
        None
    }

    fn booking_target(&self) -> Option<BookingTarget> {
        match self.view.page {
            Page::Search => self.selected_offer().map(BookingTarget::from),
            Page::Packages => self.selected_package().map(BookingTarget::from),
            Page::Home | Page::Bookings | Page::Contact => None,
        }
    }
}
