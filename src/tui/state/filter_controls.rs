//! Filter control and cursor state for the search results page.
//!
//! The controls hold raw widget values (slider position, selected options)
//! and translate them into [`FilterCriteria`] for the filter engine. The
//! cursor is clamped whenever the filtered list shrinks so it never points
//! past the last visible offer.

use crate::catalogue::{Category, DurationBucket, FilterCriteria};

/// Price slider ranging from zero to a fixed ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSlider {
    value: u32,
    ceiling: u32,
    step: u32,
}

impl PriceSlider {
    /// Creates a slider positioned at its ceiling.
    ///
    /// A zero `step` is treated as one.
    #[must_use]
    pub const fn new(ceiling: u32, step: u32) -> Self {
        Self {
            value: ceiling,
            ceiling,
            step: if step == 0 { 1 } else { step },
        }
    }

    /// Returns the selected maximum price.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Returns the upper end of the slider.
    #[must_use]
    pub const fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Moves the slider up one step, stopping at the ceiling.
    pub fn raise(&mut self) {
        self.value = self.value.saturating_add(self.step).min(self.ceiling);
    }

    /// Moves the slider down one step, stopping at zero.
    pub const fn lower(&mut self) {
        self.value = self.value.saturating_sub(self.step);
    }

    /// Sets the slider, clamping to the ceiling.
    pub fn set(&mut self, value: u32) {
        self.value = value.min(self.ceiling);
    }

    /// Returns the range label shown next to the slider.
    #[must_use]
    pub fn label(&self) -> String {
        format!("$0 - ${}", self.value)
    }
}

/// Raw values of the three filter widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControls {
    /// Maximum price slider.
    pub price: PriceSlider,
    /// Selected duration bucket, `None` for "Any duration".
    pub duration: Option<DurationBucket>,
    /// Selected trip type, `None` for "Any type".
    pub category: Option<Category>,
}

impl FilterControls {
    /// Creates controls with the slider at its ceiling and no selections.
    #[must_use]
    pub const fn new(ceiling: u32, step: u32) -> Self {
        Self {
            price: PriceSlider::new(ceiling, step),
            duration: None,
            category: None,
        }
    }

    /// Translates the widget values into filter criteria.
    #[must_use]
    pub const fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            max_price: self.price.value(),
            duration_bucket: self.duration,
            category: self.category,
        }
    }

    /// Advances the duration select to its next option.
    pub fn cycle_duration(&mut self) {
        self.duration = next_in_cycle(self.duration, &DurationBucket::ALL);
    }

    /// Advances the trip type select to its next option.
    pub fn cycle_category(&mut self) {
        self.category = next_in_cycle(self.category, &Category::ALL);
    }

    /// Restores the slider to its ceiling and clears both selects.
    pub const fn reset(&mut self) {
        self.price.value = self.price.ceiling;
        self.duration = None;
        self.category = None;
    }
}

/// Returns the option after `current`, where `None` precedes the first
/// option and follows the last.
fn next_in_cycle<T: Copy + PartialEq>(current: Option<T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().copied(),
        Some(value) => options
            .iter()
            .position(|option| *option == value)
            .and_then(|index| options.get(index.saturating_add(1)))
            .copied(),
    }
}

/// Cursor over a list whose length can change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    position: usize,
}

impl ListCursor {
    /// Returns the cursor position (0-indexed).
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Clamps the cursor to a list of `count` items.
    ///
    /// An empty list puts the cursor at zero.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
        } else if self.position >= count {
            self.position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by one position if possible.
    pub const fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Moves the cursor down by one position within a list of `count` items.
    pub const fn down(&mut self, count: usize) {
        if self.position.saturating_add(1) < count {
            self.position = self.position.saturating_add(1);
        }
    }

    /// Moves the cursor back to the first item.
    pub const fn reset(&mut self) {
        self.position = 0;
    }
}
