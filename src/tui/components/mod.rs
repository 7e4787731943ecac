//! UI components for the Wayfarer TUI.
//!
//! Each component is stateless: it renders a string from a borrowed view
//! context built by the application model on every frame.

mod booking_list;
mod card_window;
mod form_view;
mod offer_list;
mod package_list;
mod text_truncate;
mod toast_view;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use booking_list::{BookingListComponent, BookingListViewContext};
pub use form_view::{FormComponent, FormViewContext};
pub use offer_list::{OfferListComponent, OfferListViewContext};
pub use package_list::{PackageListComponent, PackageListViewContext};
pub(crate) use text_truncate::{truncate_to_height, truncate_to_width};
pub use toast_view::render_toast;
