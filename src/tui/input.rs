//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The same key means different things
//! while browsing and while typing into a form, so mapping depends on an
//! [`InputContext`].

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::Page;

/// Where key presses are currently directed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Navigating the given page.
    Browse(Page),
    /// Typing into a page form or modal.
    Editing,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
/// Ctrl+C quits from every context.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.key == KeyCode::Char('c')).then_some(AppMsg::Quit);
    }

    match context {
        InputContext::Browse(page) => map_browse_key(key.key, page),
        InputContext::Editing => map_editing_key(key.key),
    }
}

fn map_browse_key(code: KeyCode, page: Page) -> Option<AppMsg> {
    match code {
        KeyCode::Char(digit @ '1'..='5') => Page::from_shortcut(digit).map(AppMsg::ShowPage),
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char('l') => Some(AppMsg::OpenLogin),
        KeyCode::Enter => enter_action(page),
        _ => match page {
            Page::Search => map_results_key(code),
            Page::Packages => map_list_key(code),
            Page::Home | Page::Contact => {
                (code == KeyCode::Char('e')).then_some(AppMsg::BeginEditing)
            }
            Page::Bookings => None,
        },
    }
}

/// Keys for the search results page: list keys plus filter controls.
fn map_results_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(']') | KeyCode::Right => Some(AppMsg::RaisePrice),
        KeyCode::Char('[') | KeyCode::Left => Some(AppMsg::LowerPrice),
        KeyCode::Char('d') => Some(AppMsg::CycleDuration),
        KeyCode::Char('t') => Some(AppMsg::CycleCategory),
        KeyCode::Char('x') => Some(AppMsg::ClearFilters),
        _ => map_list_key(code),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_list_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('b') => Some(AppMsg::OpenBooking),
        _ => None,
    }
}

const fn enter_action(page: Page) -> Option<AppMsg> {
    match page {
        Page::Search | Page::Packages => Some(AppMsg::OpenBooking),
        Page::Home | Page::Contact => Some(AppMsg::BeginEditing),
        Page::Bookings => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_editing_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(ch) => Some(AppMsg::InsertChar(ch)),
        KeyCode::Backspace => Some(AppMsg::DeleteChar),
        KeyCode::Tab | KeyCode::Down => Some(AppMsg::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(AppMsg::PreviousField),
        KeyCode::Enter => Some(AppMsg::SubmitForm),
        KeyCode::Esc => Some(AppMsg::CancelEditing),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn key_msg(key: KeyCode) -> bubbletea_rs::event::KeyMsg {
        bubbletea_rs::event::KeyMsg {
            key,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case(KeyCode::Char('1'), AppMsg::ShowPage(Page::Home))]
    #[case(KeyCode::Char('3'), AppMsg::ShowPage(Page::Packages))]
    #[case(KeyCode::Char(']'), AppMsg::RaisePrice)]
    #[case(KeyCode::Left, AppMsg::LowerPrice)]
    #[case(KeyCode::Char('d'), AppMsg::CycleDuration)]
    #[case(KeyCode::Char('t'), AppMsg::CycleCategory)]
    #[case(KeyCode::Char('x'), AppMsg::ClearFilters)]
    #[case(KeyCode::Char('l'), AppMsg::OpenLogin)]
    #[case(KeyCode::Enter, AppMsg::OpenBooking)]
    fn browse_keys_on_search_page(#[case] code: KeyCode, #[case] expected: AppMsg) {
        let context = InputContext::Browse(Page::Search);
        assert_eq!(
            map_key_to_message_with_context(&key_msg(code), context),
            Some(expected)
        );
    }

    #[rstest]
    #[case(Page::Home, AppMsg::BeginEditing)]
    #[case(Page::Contact, AppMsg::BeginEditing)]
    #[case(Page::Packages, AppMsg::OpenBooking)]
    fn enter_depends_on_page(#[case] page: Page, #[case] expected: AppMsg) {
        assert_eq!(
            map_key_to_message_with_context(&key_msg(KeyCode::Enter), InputContext::Browse(page)),
            Some(expected)
        );
    }

    #[rstest]
    #[case(KeyCode::Char('q'), AppMsg::InsertChar('q'))]
    #[case(KeyCode::Char('1'), AppMsg::InsertChar('1'))]
    #[case(KeyCode::Backspace, AppMsg::DeleteChar)]
    #[case(KeyCode::Tab, AppMsg::NextField)]
    #[case(KeyCode::BackTab, AppMsg::PreviousField)]
    #[case(KeyCode::Enter, AppMsg::SubmitForm)]
    #[case(KeyCode::Esc, AppMsg::CancelEditing)]
    fn editing_keys_edit_the_form(#[case] code: KeyCode, #[case] expected: AppMsg) {
        assert_eq!(
            map_key_to_message_with_context(&key_msg(code), InputContext::Editing),
            Some(expected)
        );
    }

    #[rstest]
    #[case(InputContext::Editing)]
    #[case(InputContext::Browse(Page::Home))]
    fn ctrl_c_always_quits(#[case] context: InputContext) {
        let key = bubbletea_rs::event::KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(
            map_key_to_message_with_context(&key, context),
            Some(AppMsg::Quit)
        );
    }

    #[rstest]
    #[case(Page::Home, KeyCode::Char('d'))]
    #[case(Page::Bookings, KeyCode::Char('j'))]
    #[case(Page::Packages, KeyCode::Char('x'))]
    fn page_specific_keys_are_ignored_elsewhere(#[case] page: Page, #[case] code: KeyCode) {
        assert_eq!(
            map_key_to_message_with_context(&key_msg(code), InputContext::Browse(page)),
            None
        );
    }

    #[test]
    fn unmapped_browse_key_is_ignored() {
        assert_eq!(
            map_key_to_message_with_context(
                &key_msg(KeyCode::Char('z')),
                InputContext::Browse(Page::Home)
            ),
            None
        );
    }
}
