//! Toast line rendering.

use crate::tui::state::Toast;

use super::text_truncate::truncate_to_width;

const ANSI_RESET: &str = "\x1b[0m";

/// Renders a toast as a single coloured line, or an empty line when there
/// is no toast.
#[must_use]
pub fn render_toast(toast: Option<&Toast>, max_width: usize) -> String {
    let Some(current) = toast else {
        return "\n".to_owned();
    };

    let text = truncate_to_width(
        &format!("{} {}", current.severity.icon(), current.message),
        max_width,
    );
    format!("{}{text}{ANSI_RESET}\n", current.severity.ansi_colour())
}
