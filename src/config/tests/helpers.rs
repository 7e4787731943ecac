//! Layer composition helpers for Wayfarer configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::WayfarerConfig;
use crate::error::WayfarerError;
use crate::tui::state::Page;

/// Configuration source, listed from lowest to highest precedence.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `(source, layer)` pairs in the order given.
pub fn merged(layers: &[(Source, Value)]) -> WayfarerConfig {
    let mut composer = MergeComposer::new();
    for (source, layer) in layers {
        let value = layer.clone();
        match source {
            Source::Defaults => composer.push_defaults(value),
            Source::File => composer.push_file(value, None),
            Source::Environment => composer.push_environment(value),
            Source::Cli => composer.push_cli(value),
        }
    }

    WayfarerConfig::merge_from_layers(composer.layers()).expect("layers should merge")
}

/// Merges the layers and resolves the page Wayfarer would open on.
pub fn start_page(layers: &[(Source, Value)]) -> Result<Page, WayfarerError> {
    merged(layers).resolve_start_page()
}
