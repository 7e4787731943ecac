//! Text truncation helpers for fixed-size terminal views.
//!
//! Widths are measured in terminal columns, not Unicode scalar count, so
//! wide glyphs in city names and package titles are handled correctly.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncates text to `max_width` columns, ending with an ellipsis when cut.
///
/// Widths of three or less fall back to dots only.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut truncated = String::new();
    let mut used = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > budget {
            break;
        }
        truncated.push(ch);
        used = used.saturating_add(char_width);
    }
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Keeps at most `max_height` lines of `output`.
///
/// When lines are dropped the last kept line is replaced by an ellipsis so
/// the cut is visible. A zero height leaves the output unchanged.
pub(crate) fn truncate_to_height(output: &mut String, max_height: usize) {
    if max_height == 0 || output.lines().count() <= max_height {
        return;
    }

    let keep = max_height.saturating_sub(1);
    let cut_at = if keep == 0 {
        Some(0)
    } else {
        output
            .match_indices('\n')
            .nth(keep.saturating_sub(1))
            .map(|(index, _)| index.saturating_add(1))
    };

    if let Some(position) = cut_at {
        output.truncate(position);
        output.push_str(ELLIPSIS);
        output.push('\n');
    }
}
