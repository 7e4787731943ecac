//! Trip offer records and their value types.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use super::error::CatalogueError;

/// Trip type used for coarse filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Beach, spa and resort trips.
    Relaxation,
    /// Outdoor and activity-driven trips.
    Adventure,
    /// Heritage, food and local-tradition trips.
    Cultural,
    /// Trips built around meetings and work.
    Business,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 4] = [
        Self::Relaxation,
        Self::Adventure,
        Self::Cultural,
        Self::Business,
    ];

    /// Returns the lowercase identifier used by filter controls.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Relaxation => "relaxation",
            Self::Adventure => "adventure",
            Self::Cultural => "cultural",
            Self::Business => "business",
        }
    }

    /// Returns a capitalised label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relaxation => "Relaxation",
            Self::Adventure => "Adventure",
            Self::Cultural => "Cultural",
            Self::Business => "Business",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Category {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.identifier().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogueError::UnknownCategory {
                identifier: trimmed.to_owned(),
            })
    }
}

/// Length of a trip in whole days. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripDuration(NonZeroU32);

impl TripDuration {
    /// Creates a duration from a non-zero day count.
    #[must_use]
    pub const fn from_days(days: NonZeroU32) -> Self {
        Self(days)
    }

    /// Creates a duration from a raw day count, treating zero as one day.
    #[must_use]
    pub const fn at_least_one_day(days: u32) -> Self {
        match NonZeroU32::new(days) {
            Some(non_zero) => Self(non_zero),
            None => Self(NonZeroU32::MIN),
        }
    }

    /// Parses a free-text label such as `"7 days"`.
    ///
    /// The day count is the integer prefix of the label after any leading
    /// whitespace; the remainder of the label is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidDuration`] when the label has no
    /// leading digits, the count overflows, or the count is zero.
    pub fn parse_label(label: &str) -> Result<Self, CatalogueError> {
        let invalid = || CatalogueError::InvalidDuration {
            label: label.to_owned(),
        };

        let trimmed = label.trim_start();
        let digits_end = trimmed
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let digits = trimmed.get(..digits_end).ok_or_else(invalid)?;

        digits
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Returns the number of days.
    #[must_use]
    pub const fn days(self) -> u32 {
        self.0.get()
    }

    /// Returns a label in the `"7 days"` form.
    #[must_use]
    pub fn label(self) -> String {
        match self.days() {
            1 => "1 day".to_owned(),
            days => format!("{days} days"),
        }
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Review score between 0.0 and 5.0, held in tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(u8);

impl Rating {
    /// Highest representable rating in tenths (5.0).
    pub const MAX_TENTHS: u8 = 50;

    /// Creates a rating from tenths, clamping to 5.0.
    #[must_use]
    pub const fn from_tenths(tenths: u8) -> Self {
        if tenths > Self::MAX_TENTHS {
            Self(Self::MAX_TENTHS)
        } else {
            Self(tenths)
        }
    }

    /// Returns the rating in tenths (48 for 4.8).
    #[must_use]
    pub const fn tenths(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0.div_euclid(10);
        let fraction = self.0.rem_euclid(10);
        write!(f, "{whole}.{fraction}")
    }
}

/// A single bookable trip listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripOffer {
    /// Identifier, unique within one result set.
    pub id: u64,
    /// Card title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Price in whole currency units.
    pub price: u32,
    /// Trip length.
    pub duration: TripDuration,
    /// Trip type.
    pub category: Category,
    /// Average review score.
    pub rating: Rating,
    /// Image URL; opaque to the catalogue.
    pub image: String,
}

impl TripOffer {
    /// Returns the trip length in days.
    #[must_use]
    pub const fn duration_days(&self) -> u32 {
        self.duration.days()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plural("7 days", 7)]
    #[case::singular("1 day", 1)]
    #[case::leading_whitespace("  10 days", 10)]
    #[case::bare_number("3", 3)]
    #[case::trailing_text("14 Days, 7 Countries", 14)]
    fn parse_label_reads_leading_integer(#[case] label: &str, #[case] expected: u32) {
        let duration = TripDuration::parse_label(label).expect("label should parse");
        assert_eq!(duration.days(), expected);
    }

    #[rstest]
    #[case::no_digits("days")]
    #[case::digits_not_leading("about 5 days")]
    #[case::zero("0 days")]
    #[case::empty("")]
    #[case::overflow("99999999999 days")]
    fn parse_label_rejects_invalid_labels(#[case] label: &str) {
        assert_eq!(
            TripDuration::parse_label(label),
            Err(CatalogueError::InvalidDuration {
                label: label.to_owned()
            })
        );
    }

    #[test]
    fn zero_days_is_promoted_to_one() {
        assert_eq!(TripDuration::at_least_one_day(0).days(), 1);
        assert_eq!(TripDuration::at_least_one_day(5).days(), 5);
    }

    #[test]
    fn duration_label_pluralises() {
        assert_eq!(TripDuration::at_least_one_day(1).label(), "1 day");
        assert_eq!(TripDuration::at_least_one_day(4).label(), "4 days");
    }

    #[test]
    fn category_round_trips_through_identifier() {
        for category in Category::ALL {
            assert_eq!(category.identifier().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn category_parsing_ignores_case_and_whitespace() {
        assert_eq!(" Cultural ".parse::<Category>(), Ok(Category::Cultural));
    }

    #[test]
    fn unknown_category_is_reported() {
        assert_eq!(
            "cruise".parse::<Category>(),
            Err(CatalogueError::UnknownCategory {
                identifier: "cruise".to_owned()
            })
        );
    }

    #[rstest]
    #[case(48, "4.8")]
    #[case(50, "5.0")]
    #[case(0, "0.0")]
    #[case(73, "5.0")]
    fn rating_displays_one_decimal_place(#[case] tenths: u8, #[case] expected: &str) {
        assert_eq!(Rating::from_tenths(tenths).to_string(), expected);
    }
}
