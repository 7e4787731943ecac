//! Form editing and submission handlers.
//!
//! The form receiving key presses is the open modal's form, or the active
//! page's form while editing. Rejected submissions keep the form open and
//! show the validation message as a warning toast.

use bubbletea_rs::Cmd;
use chrono::Utc;

use super::TravelApp;
use crate::bookings::BookingRequest;
use crate::catalogue::{SearchRequest, generate_results};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::{FormState, Modal, Page, Severity};

impl TravelApp {
    /// Dispatches form messages to their handlers.
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::BeginEditing => self.handle_begin_editing(),
            AppMsg::InsertChar(ch) => self.edit_active_form(|form| form.insert_char(*ch)),
            AppMsg::DeleteChar => self.edit_active_form(FormState::delete_char),
            AppMsg::NextField => self.edit_active_form(FormState::focus_next),
            AppMsg::PreviousField => self.edit_active_form(FormState::focus_previous),
            AppMsg::SubmitForm => self.handle_submit(),
            AppMsg::CancelEditing => self.handle_cancel_editing(),
            _ => {
                debug_assert!(false, "non-form message routed to handle_form_msg");
                None
            }
        }
    }

    fn handle_begin_editing(&mut self) -> Option<Cmd> {
        if self.view.modal.is_none() && matches!(self.view.page, Page::Home | Page::Contact) {
            self.view.editing = true;
        }
        None
    }

    fn edit_active_form(&mut self, edit: impl FnOnce(&mut FormState)) -> Option<Cmd> {
        if let Some(form) = self.active_form_mut() {
            edit(form);
        }
        None
    }

    /// Returns the form receiving key presses, if any.
    fn active_form_mut(&mut self) -> Option<&mut FormState> {
        if let Some(modal) = self.view.modal.as_mut() {
            return Some(modal.form_mut());
        }
        if !self.view.editing {
            return None;
        }
        match self.view.page {
            Page::Home => Some(&mut self.search_form),
            Page::Contact => Some(&mut self.contact_form),
            Page::Search | Page::Packages | Page::Bookings => None,
        }
    }

    fn handle_cancel_editing(&mut self) -> Option<Cmd> {
        self.view.modal = None;
        self.view.editing = false;
        None
    }

    fn handle_submit(&mut self) -> Option<Cmd> {
        match self.view.modal {
            Some(Modal::Login(_)) => return Some(self.submit_login()),
            Some(Modal::Booking { .. }) => return Some(self.submit_booking()),
            None => {}
        }
        if !self.view.editing {
            return None;
        }
        match self.view.page {
            Page::Home => Some(self.submit_search()),
            Page::Contact => Some(self.submit_contact()),
            Page::Search | Page::Packages | Page::Bookings => None,
        }
    }

    /// Validates the quick search form and replaces the result set.
    fn submit_search(&mut self) -> Cmd {
        let request = match SearchRequest::from_fields(self.search_form.search_fields(), self.today)
        {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!("search rejected: {error}");
                return self.show_toast(error.to_string(), Severity::Warning);
            }
        };

        self.offers = generate_results(&request);
        self.results_cursor.reset();
        self.view.editing = false;
        self.telemetry.record(TelemetryEvent::SearchCompleted {
            result_count: self.offers.len(),
        });
        tracing::debug!(
            "search completed: {} to {} returned {} offers",
            request.from,
            request.to,
            self.offers.len()
        );
        self.activate_page(Page::Search);
        self.show_toast("Search completed! Found multiple options.", Severity::Success)
    }

    /// Signs in with the placeholder profile, whatever was typed.
    fn submit_login(&mut self) -> Cmd {
        let user = self.session.sign_in();
        tracing::debug!("signed in as {}", user.email);
        self.view.modal = None;
        self.telemetry.record(TelemetryEvent::SignedIn);
        self.show_toast("Login successful! Welcome back.", Severity::Success)
    }

    /// Validates the booking form and records the booking.
    fn submit_booking(&mut self) -> Cmd {
        let Some(Modal::Booking { target, form }) = self.view.modal.as_ref() else {
            return self.show_toast("No booking in progress", Severity::Error);
        };

        let request = match BookingRequest::from_form(target.clone(), form.value(0), form.value(1))
        {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!("booking rejected: {error}");
                return self.show_toast(error.to_string(), Severity::Warning);
            }
        };

        let booking = self.bookings.confirm(request, Utc::now());
        tracing::debug!("booking {} confirmed for {}", booking.id, booking.title);
        self.view.modal = None;
        self.telemetry.record(TelemetryEvent::BookingConfirmed {
            booking_id: booking.id,
            price: booking.price,
        });
        self.show_toast(
            "Booking confirmed! Check your email for details.",
            Severity::Success,
        )
    }

    /// Pretends to send the contact message and clears the form.
    fn submit_contact(&mut self) -> Cmd {
        self.contact_form.clear();
        self.view.editing = false;
        self.show_toast(
            "Message sent successfully! We'll get back to you soon.",
            Severity::Success,
        )
    }
}
