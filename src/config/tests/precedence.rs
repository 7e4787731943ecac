//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::{Source, merged, start_page};
use crate::error::WayfarerError;
use crate::tui::state::Page;

#[rstest]
#[case::file_overrides_defaults(
    vec![(Source::Defaults, json!({"start_page": "home"})), (Source::File, json!({"start_page": "packages"}))],
    Page::Packages
)]
#[case::environment_overrides_file(
    vec![(Source::File, json!({"start_page": "packages"})), (Source::Environment, json!({"start_page": "search"}))],
    Page::Search
)]
#[case::cli_overrides_environment(
    vec![(Source::Environment, json!({"start_page": "search"})), (Source::Cli, json!({"start_page": "bookings"}))],
    Page::Bookings
)]
fn start_page_follows_the_highest_layer(#[case] layers: Vec<(Source, Value)>, #[case] expected: Page) {
    assert_eq!(start_page(&layers), Ok(expected));
}

#[rstest]
fn invalid_lower_layer_is_masked_by_a_valid_cli_page() {
    let page = start_page(&[
        (Source::File, json!({"start_page": "checkout"})),
        (Source::Cli, json!({"start_page": "contact"})),
    ]);

    assert_eq!(page, Ok(Page::Contact));
}

#[rstest]
fn invalid_top_layer_page_is_reported() {
    let page = start_page(&[(Source::Environment, json!({"start_page": "checkout"}))]);

    assert_eq!(
        page,
        Err(WayfarerError::UnknownPage {
            identifier: "checkout".to_owned()
        })
    );
}

#[rstest]
fn numeric_fields_follow_the_highest_layer() {
    let config = merged(&[
        (Source::Defaults, json!({"max_price_ceiling": 5000, "price_step": 100})),
        (Source::File, json!({"max_price_ceiling": 8000})),
        (Source::Cli, json!({"price_step": 250})),
    ]);

    assert_eq!(config.max_price_ceiling, 8000);
    assert_eq!(config.price_step, 250);
}

#[rstest]
fn unset_fields_keep_struct_defaults() {
    let config = merged(&[(Source::File, json!({"start_page": "contact"}))]);

    assert_eq!(config.max_price_ceiling, 5000);
    assert_eq!(config.price_step, 100);
    assert_eq!(config.toast_seconds, 3);
    assert!(!config.telemetry, "telemetry should default to false");
}
