//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, timer results and
//! system events.

use crate::catalogue::{Category, DurationBucket};

use super::state::Page;

/// Messages for the Wayfarer TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Activate a page.
    ShowPage(Page),
    /// Move the list cursor up one item.
    CursorUp,
    /// Move the list cursor down one item.
    CursorDown,

    // Filter changes
    /// Move the price slider up one step.
    RaisePrice,
    /// Move the price slider down one step.
    LowerPrice,
    /// Set the price slider directly.
    SetMaxPrice(u32),
    /// Advance the duration select.
    CycleDuration,
    /// Advance the trip type select.
    CycleCategory,
    /// Select a duration bucket, `None` for any.
    SetDuration(Option<DurationBucket>),
    /// Select a trip type, `None` for any.
    SetCategory(Option<Category>),
    /// Reset every filter control.
    ClearFilters,

    // Form editing
    /// Start editing the active page's form.
    BeginEditing,
    /// Type a character into the focused field.
    InsertChar(char),
    /// Delete the last character of the focused field.
    DeleteChar,
    /// Focus the next field.
    NextField,
    /// Focus the previous field.
    PreviousField,
    /// Submit the form being edited.
    SubmitForm,
    /// Stop editing, closing any modal.
    CancelEditing,

    // Modals
    /// Open the login modal.
    OpenLogin,
    /// Open the booking modal for the selected offer or package.
    OpenBooking,
    /// Close the open modal.
    CloseModal,

    // Notifications
    /// A toast's display time elapsed.
    ToastExpired {
        /// Generation of the toast the timer was started for.
        generation: u64,
    },

    // Application lifecycle
    /// Synthetic startup event.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for page and cursor navigation.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(self, Self::ShowPage(_) | Self::CursorUp | Self::CursorDown)
    }

    /// Returns true for filter control changes.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::RaisePrice
                | Self::LowerPrice
                | Self::SetMaxPrice(_)
                | Self::CycleDuration
                | Self::CycleCategory
                | Self::SetDuration(_)
                | Self::SetCategory(_)
                | Self::ClearFilters
        )
    }

    /// Returns true for form editing messages.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::BeginEditing
                | Self::InsertChar(_)
                | Self::DeleteChar
                | Self::NextField
                | Self::PreviousField
                | Self::SubmitForm
                | Self::CancelEditing
        )
    }

    /// Returns true for modal open and close messages.
    #[must_use]
    pub const fn is_modal(&self) -> bool {
        matches!(self, Self::OpenLogin | Self::OpenBooking | Self::CloseModal)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(AppMsg::ShowPage(Page::Search), true, false, false, false)]
    #[case(AppMsg::SetMaxPrice(900), false, true, false, false)]
    #[case(AppMsg::InsertChar('a'), false, false, true, false)]
    #[case(AppMsg::OpenBooking, false, false, false, true)]
    #[case(AppMsg::ToastExpired { generation: 1 }, false, false, false, false)]
    fn messages_belong_to_one_group(
        #[case] msg: AppMsg,
        #[case] navigation: bool,
        #[case] filter: bool,
        #[case] form: bool,
        #[case] modal: bool,
    ) {
        assert_eq!(msg.is_navigation(), navigation);
        assert_eq!(msg.is_filter(), filter);
        assert_eq!(msg.is_form(), form);
        assert_eq!(msg.is_modal(), modal);
    }
}
