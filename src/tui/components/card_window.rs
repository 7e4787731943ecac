//! Windowing for lists of fixed-height cards.

use std::ops::Range;

/// Returns the range of card indices to draw so the cursor stays visible.
///
/// `capacity` is how many cards fit; at least one card is always drawn when
/// the list is non-empty.
pub(crate) fn visible_cards(count: usize, cursor: usize, capacity: usize) -> Range<usize> {
    let cards = capacity.max(1);
    let start = cursor.saturating_sub(cards.saturating_sub(1)).min(count);
    let end = start.saturating_add(cards).min(count);
    start..end
}

/// Returns how many cards of `card_height` rows fit in `max_height` rows.
pub(crate) const fn card_capacity(max_height: usize, card_height: usize) -> usize {
    match max_height.checked_div(card_height) {
        Some(capacity) if capacity > 0 => capacity,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(4, 0, 2, 0..2)]
    #[case(4, 1, 2, 0..2)]
    #[case(4, 3, 2, 2..4)]
    #[case(4, 2, 10, 0..4)]
    #[case(0, 0, 3, 0..0)]
    #[case(3, 2, 0, 2..3)]
    fn window_follows_cursor(
        #[case] count: usize,
        #[case] cursor: usize,
        #[case] capacity: usize,
        #[case] expected: Range<usize>,
    ) {
        assert_eq!(visible_cards(count, cursor, capacity), expected);
    }

    #[rstest]
    #[case(12, 4, 3)]
    #[case(3, 4, 1)]
    #[case(10, 0, 1)]
    fn capacity_is_never_zero(#[case] height: usize, #[case] card: usize, #[case] expected: usize) {
        assert_eq!(card_capacity(height, card), expected);
    }
}
