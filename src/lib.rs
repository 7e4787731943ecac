//! Wayfarer library crate providing a terminal travel booking mockup.
//!
//! The library models trip offers, filters them on the client side, keeps an
//! in-memory booking ledger and renders everything through a bubbletea-rs
//! terminal interface. There is no backend: search results and packages are
//! compiled-in sample data.

pub mod bookings;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;
pub mod tui;

pub use bookings::{
    Booking, BookingError, BookingLedger, BookingRequest, BookingStatus, BookingTarget,
};
pub use catalogue::{
    CatalogueError, Category, DurationBucket, FilterCriteria, Rating, SearchError, SearchRequest,
    TravelPackage, TripDuration, TripOffer, filter_offers,
};
pub use config::WayfarerConfig;
pub use error::WayfarerError;
pub use session::{Session, UserProfile};
