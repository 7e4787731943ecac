//! Booking list component for the "My Bookings" page.

use crate::bookings::Booking;
use crate::catalogue::DATE_FORMAT;

use super::card_window::{card_capacity, visible_cards};
use super::text_truncate::truncate_to_width;

/// Rows used by one booking card, including the blank separator.
const CARD_HEIGHT: usize = 3;

/// Context for rendering the booking list view.
#[derive(Debug, Clone)]
pub struct BookingListViewContext<'a> {
    /// Bookings in the order they were made.
    pub bookings: &'a [Booking],
    /// Available width in columns.
    pub max_width: usize,
    /// Available height in rows.
    pub max_height: usize,
}

/// Component for displaying bookings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingListComponent;

impl BookingListComponent {
    /// Renders the bookings, newest last, keeping the newest visible.
    #[must_use]
    pub fn view(ctx: &BookingListViewContext<'_>) -> String {
        if ctx.bookings.is_empty() {
            return "  No bookings yet\n  Start planning your next adventure! Press 2 to search trips.\n"
                .to_owned();
        }

        let newest = ctx.bookings.len().saturating_sub(1);
        let window = visible_cards(
            ctx.bookings.len(),
            newest,
            card_capacity(ctx.max_height, CARD_HEIGHT),
        );

        ctx.bookings
            .iter()
            .skip(window.start)
            .take(window.len())
            .map(|booking| format_card(booking, ctx.max_width))
            .collect()
    }
}

fn format_card(booking: &Booking, max_width: usize) -> String {
    let title = truncate_to_width(&booking.title, max_width.saturating_sub(2));
    format!(
        "  {title}\n    {} | {} Travelers | ${} | {}\n\n",
        booking.date.format(DATE_FORMAT),
        booking.travellers,
        booking.price,
        booking.status
    )
}
