//! Page and modal view state.
//!
//! The visible section of the application is a pure function of
//! [`ViewState`]: exactly one page is active, at most one modal is open and
//! the help overlay sits on top of everything.

use std::fmt;
use std::str::FromStr;

use crate::bookings::BookingTarget;
use crate::error::WayfarerError;

use super::form::FormState;

/// Top-level sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Landing page with the quick search form.
    #[default]
    Home,
    /// Search results with filter controls.
    Search,
    /// Curated travel packages.
    Packages,
    /// Bookings made during this session.
    Bookings,
    /// Contact form.
    Contact,
}

impl Page {
    /// All pages in navigation bar order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Search,
        Self::Packages,
        Self::Bookings,
        Self::Contact,
    ];

    /// Returns the identifier used in configuration.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search => "search",
            Self::Packages => "packages",
            Self::Bookings => "bookings",
            Self::Contact => "contact",
        }
    }

    /// Returns the navigation bar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Search => "Search",
            Self::Packages => "Packages",
            Self::Bookings => "My Bookings",
            Self::Contact => "Contact",
        }
    }

    /// Returns the digit key that activates this page.
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::Home => '1',
            Self::Search => '2',
            Self::Packages => '3',
            Self::Bookings => '4',
            Self::Contact => '5',
        }
    }

    /// Looks up the page bound to a digit key.
    #[must_use]
    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.shortcut() == key)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Page {
    type Err = WayfarerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|page| page.identifier() == normalised)
            .ok_or_else(|| WayfarerError::UnknownPage {
                identifier: value.trim().to_owned(),
            })
    }
}

/// Dialogs drawn over the active page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Simulated sign-in form.
    Login(FormState),
    /// Booking form for an offer or package.
    Booking {
        /// What is being booked.
        target: BookingTarget,
        /// Travel date and traveller count.
        form: FormState,
    },
}

impl Modal {
    /// Returns the modal's form.
    #[must_use]
    pub const fn form(&self) -> &FormState {
        match self {
            Self::Login(form) | Self::Booking { form, .. } => form,
        }
    }

    /// Returns the modal's form for editing.
    pub const fn form_mut(&mut self) -> &mut FormState {
        match self {
            Self::Login(form) | Self::Booking { form, .. } => form,
        }
    }
}

/// Which page, modal and overlay are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Active page.
    pub page: Page,
    /// Open modal, if any.
    pub modal: Option<Modal>,
    /// Whether key presses edit the page form rather than navigate.
    pub editing: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
}

impl ViewState {
    /// Creates a view state showing `page`.
    #[must_use]
    pub const fn showing(page: Page) -> Self {
        Self {
            page,
            modal: None,
            editing: false,
            show_help: false,
        }
    }

    /// Returns true when key presses go to a form.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing || self.modal.is_some()
    }
}
