//! Command-line entry points for the Wayfarer binary.

pub mod travel_tui;
