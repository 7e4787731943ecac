//! Package list component for the packages page.

use crate::catalogue::TravelPackage;

use super::card_window::{card_capacity, visible_cards};
use super::text_truncate::truncate_to_width;

/// Rows used by one package card, including the blank separator.
const CARD_HEIGHT: usize = 5;

/// Context for rendering the package list view.
#[derive(Debug, Clone)]
pub struct PackageListViewContext<'a> {
    /// Loaded packages; `None` until the page is first activated.
    pub packages: Option<&'a [TravelPackage]>,
    /// Cursor position within the package list.
    pub cursor_position: usize,
    /// Available width in columns.
    pub max_width: usize,
    /// Available height in rows.
    pub max_height: usize,
}

/// Component for displaying travel packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageListComponent;

impl PackageListComponent {
    /// Renders the package cards as a string.
    #[must_use]
    pub fn view(ctx: &PackageListViewContext<'_>) -> String {
        let Some(packages) = ctx.packages else {
            return "  Loading packages...\n".to_owned();
        };

        let window = visible_cards(
            packages.len(),
            ctx.cursor_position,
            card_capacity(ctx.max_height, CARD_HEIGHT),
        );

        let mut output = String::new();
        for (index, package) in packages
            .iter()
            .enumerate()
            .skip(window.start)
            .take(window.len())
        {
            let selected = index == ctx.cursor_position;
            output.push_str(&format_card(package, selected, ctx.max_width));
        }
        output
    }
}

fn format_card(package: &TravelPackage, selected: bool, max_width: usize) -> String {
    let prefix = if selected { ">" } else { " " };
    let inner_width = max_width.saturating_sub(4);
    let heading = truncate_to_width(
        &format!("[{}] {}", package.badge, package.title),
        inner_width,
    );
    let description = truncate_to_width(&package.description, inner_width);
    let features = truncate_to_width(&package.features.join(" · "), inner_width);
    format!(
        "{prefix} {heading}\n    {description}\n    {features}\n    ${}  [Book Package]\n\n",
        package.price
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::sample;

    #[test]
    fn unloaded_packages_show_loading_line() {
        let ctx = PackageListViewContext {
            packages: None,
            cursor_position: 0,
            max_width: 80,
            max_height: 20,
        };
        assert_eq!(PackageListComponent::view(&ctx), "  Loading packages...\n");
    }

    #[test]
    fn cards_show_badge_features_and_price() {
        let packages = sample::packages();
        let ctx = PackageListViewContext {
            packages: Some(&packages),
            cursor_position: 1,
            max_width: 120,
            max_height: 40,
        };
        let output = PackageListComponent::view(&ctx);

        assert!(output.contains("  [Popular] European Grand Tour"));
        assert!(output.contains("> [Adventure] Asian Adventure"));
        assert!(output.contains("14 Days · 7 Countries"));
        assert!(output.contains("$3299  [Book Package]"));
    }
}
