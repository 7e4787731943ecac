//! Text form state for the search, contact, login and booking forms.
//!
//! A form is an ordered list of single-line fields with one focused field.
//! Focus wraps in both directions.

use chrono::NaiveDate;

use crate::bookings::DEFAULT_TRAVELLERS;
use crate::catalogue::{DATE_FORMAT, SearchFields};

/// Which form a [`FormState`] backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Quick search on the home page.
    QuickSearch,
    /// Contact form.
    Contact,
    /// Login modal.
    Login,
    /// Booking modal.
    Booking,
}

impl FormKind {
    /// Returns the form's heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::QuickSearch => "Find your next trip",
            Self::Contact => "Get in touch",
            Self::Login => "Login",
            Self::Booking => "Book your trip",
        }
    }

    /// Returns the label of the submit control.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::QuickSearch => "Search",
            Self::Contact => "Send Message",
            Self::Login => "Login",
            Self::Booking => "Confirm Booking",
        }
    }
}

/// A single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Label shown before the input.
    pub label: &'static str,
    /// Current text.
    pub value: String,
    /// Whether the value is rendered as asterisks.
    pub masked: bool,
}

impl FormField {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
        }
    }

    fn with_value(label: &'static str, value: String) -> Self {
        Self {
            value,
            ..Self::new(label)
        }
    }

    fn masked(label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    /// Returns the text to render for this field.
    #[must_use]
    pub fn display_value(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Fields and focus of one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    kind: FormKind,
    fields: Vec<FormField>,
    focus: usize,
}

impl FormState {
    /// Creates the home page quick search form.
    #[must_use]
    pub fn quick_search() -> Self {
        Self::from_fields(
            FormKind::QuickSearch,
            vec![
                FormField::new("From"),
                FormField::new("To"),
                FormField::new("Departure (YYYY-MM-DD)"),
                FormField::new("Return (optional)"),
            ],
        )
    }

    /// Creates the contact form.
    #[must_use]
    pub fn contact() -> Self {
        Self::from_fields(
            FormKind::Contact,
            vec![
                FormField::new("Name"),
                FormField::new("Email"),
                FormField::new("Message"),
            ],
        )
    }

    /// Creates the login form.
    #[must_use]
    pub fn login() -> Self {
        Self::from_fields(
            FormKind::Login,
            vec![FormField::new("Email"), FormField::masked("Password")],
        )
    }

    /// Creates the booking form with the travel date prefilled.
    #[must_use]
    pub fn booking(default_date: NaiveDate) -> Self {
        Self::from_fields(
            FormKind::Booking,
            vec![
                FormField::with_value("Travel date", default_date.format(DATE_FORMAT).to_string()),
                FormField::with_value("Travellers", DEFAULT_TRAVELLERS.to_string()),
            ],
        )
    }

    const fn from_fields(kind: FormKind, fields: Vec<FormField>) -> Self {
        Self {
            kind,
            fields,
            focus: 0,
        }
    }

    /// Returns which form this is.
    #[must_use]
    pub const fn kind(&self) -> FormKind {
        self.kind
    }

    /// Returns the fields in display order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Returns the index of the focused field.
    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the text of the field at `index`, or an empty string.
    #[must_use]
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map_or("", |field| field.value.as_str())
    }

    /// Reads the quick search fields.
    #[must_use]
    pub fn search_fields(&self) -> SearchFields<'_> {
        SearchFields {
            from: self.value(0),
            to: self.value(1),
            departure: self.value(2),
            return_date: self.value(3),
        }
    }

    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(ch);
        }
    }

    /// Removes the last character of the focused field.
    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Moves focus to the next field, wrapping to the first.
    pub fn focus_next(&mut self) {
        let count = self.fields.len();
        if count == 0 {
            return;
        }
        self.focus = self.focus.saturating_add(1).checked_rem(count).unwrap_or(0);
    }

    /// Moves focus to the previous field, wrapping to the last.
    pub fn focus_previous(&mut self) {
        self.focus = match self.focus.checked_sub(1) {
            Some(previous) => previous,
            None => self.fields.len().saturating_sub(1),
        };
    }

    /// Empties every field and focuses the first.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
    }
}
