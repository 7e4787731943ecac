//! Helpers for checking rendered TUI output in tests.

use unicode_width::UnicodeWidthStr;

/// Strips ANSI escape sequences from rendered output.
///
/// # Example
///
/// ```
/// use wayfarer::tui::components::test_utils::strip_ansi_codes;
///
/// let toast = "\x1b[32m✓ Booking confirmed!\x1b[0m";
/// assert_eq!(strip_ansi_codes(toast), "✓ Booking confirmed!");
/// ```
#[must_use]
pub fn strip_ansi_codes(s: &str) -> String {
    let mut plain = String::with_capacity(s.len());
    let mut in_escape = false;

    for ch in s.chars() {
        match (in_escape, ch) {
            (_, '\x1b') => in_escape = true,
            (true, terminator) => in_escape = !terminator.is_ascii_alphabetic(),
            (false, visible) => plain.push(visible),
        }
    }

    plain
}

/// Returns the widest visible line in `rendered`, ignoring escapes.
#[must_use]
pub fn widest_line(rendered: &str) -> usize {
    strip_ansi_codes(rendered)
        .lines()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::colour_codes("\x1b[31mred\x1b[0m", "red")]
    #[case::severity_icon("\x1b[33m! Travellers missing\x1b[0m", "! Travellers missing")]
    #[case::plain_text("Showing 2 of 4 results", "Showing 2 of 4 results")]
    #[case::empty("", "")]
    #[case::only_codes("\x1b[31m\x1b[0m", "")]
    fn strips_escape_sequences(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_ansi_codes(input), expected);
    }

    #[test]
    fn widest_line_ignores_escapes_and_counts_wide_glyphs() {
        let rendered = "\x1b[32mok\x1b[0m\n★ 4.8\n";
        assert_eq!(widest_line(rendered), 5);
        assert_eq!(widest_line(""), 0);
    }
}
