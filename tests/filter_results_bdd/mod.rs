//! Support code for filter result BDD tests.

pub(crate) mod state;

pub(crate) use state::FilterState;
