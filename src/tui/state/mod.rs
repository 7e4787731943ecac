//! State management for the Wayfarer TUI.
//!
//! This module provides the view state (page, modal, help overlay), the
//! filter controls and list cursors, form contents and toast notifications.

mod filter_controls;
mod form;
mod page;
mod toast;

pub use filter_controls::{FilterControls, ListCursor, PriceSlider};
pub use form::{FormField, FormKind, FormState};
pub use page::{Modal, Page, ViewState};
pub use toast::{Severity, Toast, ToastState};
