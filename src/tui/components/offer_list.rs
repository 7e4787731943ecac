//! Offer list component for the search results page.
//!
//! Renders the filtered offers as cards with cursor highlighting. Only the
//! cards that fit the available height are drawn, and the window follows
//! the cursor.

use crate::catalogue::TripOffer;

use super::card_window::{card_capacity, visible_cards};
use super::text_truncate::truncate_to_width;

/// Rows used by one offer card, including the blank separator.
const CARD_HEIGHT: usize = 4;

/// Context for rendering the offer list view.
#[derive(Debug, Clone)]
pub struct OfferListViewContext<'a> {
    /// Full unfiltered result set.
    pub offers: &'a [TripOffer],
    /// Indices of offers matching the current filter, in result order.
    pub filtered_indices: &'a [usize],
    /// Cursor position within the filtered list.
    pub cursor_position: usize,
    /// Available width in columns.
    pub max_width: usize,
    /// Available height in rows.
    pub max_height: usize,
}

/// Component for displaying trip offers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfferListComponent;

impl OfferListComponent {
    /// Renders the filtered offers as a string.
    #[must_use]
    pub fn view(ctx: &OfferListViewContext<'_>) -> String {
        if ctx.filtered_indices.is_empty() {
            return "  No results found\n  Try adjusting your filters\n".to_owned();
        }

        let window = visible_cards(
            ctx.filtered_indices.len(),
            ctx.cursor_position,
            card_capacity(ctx.max_height, CARD_HEIGHT),
        );

        let mut output = String::new();
        for (display_index, &offer_index) in ctx
            .filtered_indices
            .iter()
            .enumerate()
            .skip(window.start)
            .take(window.len())
        {
            let Some(offer) = ctx.offers.get(offer_index) else {
                continue;
            };
            let selected = display_index == ctx.cursor_position;
            output.push_str(&format_card(offer, selected, ctx.max_width));
        }
        output
    }
}

fn format_card(offer: &TripOffer, selected: bool, max_width: usize) -> String {
    let prefix = if selected { ">" } else { " " };
    let inner_width = max_width.saturating_sub(4);
    let title = truncate_to_width(&offer.title, inner_width);
    let description = truncate_to_width(&offer.description, inner_width);
    format!(
        "{prefix} {title}\n    {description}\n    ${} | {} | {} | ★ {}  [Book Now]\n\n",
        offer.price,
        offer.duration,
        offer.category.label(),
        offer.rating
    )
}
