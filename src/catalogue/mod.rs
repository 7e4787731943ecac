//! Trip catalogue: offers, packages, search and client-side filtering.
//!
//! Everything here is plain data and pure functions. The offer collection is
//! owned by the caller (the TUI application state) and only borrowed by
//! [`filter_offers`], which returns references in input order.

mod error;
mod filter;
mod offer;
mod packages;
pub mod sample;
mod search;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::CatalogueError;
pub use filter::{DurationBucket, FilterCriteria, filter_offers, matching_indices};
pub use offer::{Category, Rating, TripDuration, TripOffer};
pub use packages::TravelPackage;
pub use search::{DATE_FORMAT, SearchError, SearchFields, SearchRequest, generate_results};
