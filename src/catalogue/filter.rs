//! Client-side filtering of trip offers.
//!
//! The filter is a pure function over a borrowed offer slice. It keeps an
//! offer only when all three predicates hold (price ceiling, duration bucket,
//! category) and never reorders, duplicates or mutates the input.

use std::fmt;
use std::str::FromStr;

use super::error::CatalogueError;
use super::offer::{Category, TripOffer};

/// Named duration range used by the duration filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationBucket {
    /// One to three days (`1-3`).
    Short,
    /// Four to seven days (`4-7`).
    Week,
    /// Eight days or more (`8+`).
    Extended,
}

impl DurationBucket {
    /// Every bucket in display order.
    pub const ALL: [Self; 3] = [Self::Short, Self::Week, Self::Extended];

    /// Returns the identifier used by filter controls.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Short => "1-3",
            Self::Week => "4-7",
            Self::Extended => "8+",
        }
    }

    /// Returns a label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "1-3 days",
            Self::Week => "4-7 days",
            Self::Extended => "8+ days",
        }
    }

    /// Returns true when `days` falls inside this bucket.
    #[must_use]
    pub const fn contains(self, days: u32) -> bool {
        match self {
            Self::Short => days >= 1 && days <= 3,
            Self::Week => days >= 4 && days <= 7,
            Self::Extended => days >= 8,
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for DurationBucket {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.identifier() == trimmed)
            .ok_or_else(|| CatalogueError::UnknownDurationBucket {
                identifier: trimmed.to_owned(),
            })
    }
}

/// Constraints applied to narrow the visible offers.
///
/// `None` for the bucket or category means "no constraint". The price ceiling
/// is inclusive and always applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Inclusive upper bound on price.
    pub max_price: u32,
    /// Optional duration range.
    pub duration_bucket: Option<DurationBucket>,
    /// Optional exact-match category.
    pub category: Option<Category>,
}

impl FilterCriteria {
    /// Creates criteria constrained only by price.
    #[must_use]
    pub const fn with_max_price(max_price: u32) -> Self {
        Self {
            max_price,
            duration_bucket: None,
            category: None,
        }
    }

    /// Creates criteria that accept every offer in `offers`.
    ///
    /// The ceiling is the highest price present, or zero for an empty slice.
    #[must_use]
    pub fn permissive_for(offers: &[TripOffer]) -> Self {
        let max_price = offers.iter().map(|offer| offer.price).max().unwrap_or(0);
        Self::with_max_price(max_price)
    }

    /// Returns true if `offer` satisfies the price, duration and category
    /// predicates.
    #[must_use]
    pub fn matches(&self, offer: &TripOffer) -> bool {
        let price_match = offer.price <= self.max_price;
        let duration_match = self
            .duration_bucket
            .is_none_or(|bucket| bucket.contains(offer.duration_days()));
        let category_match = self
            .category
            .is_none_or(|category| category == offer.category);

        price_match && duration_match && category_match
    }

    /// Returns a short human-readable summary of the criteria.
    #[must_use]
    pub fn label(&self) -> String {
        let duration = self.duration_bucket.map_or("Any duration", DurationBucket::label);
        let category = self.category.map_or("Any type", Category::label);
        format!("Up to ${} | {duration} | {category}", self.max_price)
    }
}

/// Returns the offers that satisfy `criteria`, preserving input order.
///
/// The result borrows from `offers`; the input slice is left untouched.
#[must_use]
pub fn filter_offers<'a>(offers: &'a [TripOffer], criteria: &FilterCriteria) -> Vec<&'a TripOffer> {
    matching_indices(offers, criteria)
        .into_iter()
        .filter_map(|index| offers.get(index))
        .collect()
}

/// Returns the positions of the offers that satisfy `criteria`, ascending.
///
/// The TUI caches these indices so the offers stay owned by the app.
#[must_use]
pub fn matching_indices(offers: &[TripOffer], criteria: &FilterCriteria) -> Vec<usize> {
    offers
        .iter()
        .enumerate()
        .filter(|(_, offer)| criteria.matches(offer))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalogue::test_support::offer;

    #[fixture]
    fn generated() -> Vec<TripOffer> {
        vec![
            offer(1, 1299, 7, Category::Relaxation),
            offer(2, 899, 5, Category::Adventure),
            offer(3, 749, 4, Category::Cultural),
            offer(4, 599, 3, Category::Business),
        ]
    }

    #[fixture]
    fn mixed_lengths() -> Vec<TripOffer> {
        vec![
            offer(10, 3299, 14, Category::Cultural),
            offer(11, 899, 3, Category::Cultural),
            offer(12, 1599, 7, Category::Adventure),
            offer(13, 450, 1, Category::Business),
            offer(14, 2499, 8, Category::Adventure),
            offer(15, 1899, 10, Category::Relaxation),
        ]
    }

    fn ids(offers: &[&TripOffer]) -> Vec<u64> {
        offers.iter().map(|offer| offer.id).collect()
    }

    fn is_subsequence(filtered: &[&TripOffer], source: &[TripOffer]) -> bool {
        let mut remaining = source.iter();
        filtered
            .iter()
            .all(|wanted| remaining.any(|candidate| candidate == *wanted))
    }

    fn sample_criteria() -> Vec<FilterCriteria> {
        let mut criteria = Vec::new();
        for max_price in [0, 599, 900, 1600, 5000] {
            for duration_bucket in [None]
                .into_iter()
                .chain(DurationBucket::ALL.into_iter().map(Some))
            {
                for category in [None].into_iter().chain(Category::ALL.into_iter().map(Some)) {
                    criteria.push(FilterCriteria {
                        max_price,
                        duration_bucket,
                        category,
                    });
                }
            }
        }
        criteria
    }

    #[rstest]
    fn indices_point_at_the_filtered_offers(mixed_lengths: Vec<TripOffer>) {
        for criteria in sample_criteria() {
            let by_index: Vec<u64> = matching_indices(&mixed_lengths, &criteria)
                .into_iter()
                .filter_map(|index| mixed_lengths.get(index))
                .map(|offer| offer.id)
                .collect();
            assert_eq!(by_index, ids(&filter_offers(&mixed_lengths, &criteria)));
        }
    }

    #[rstest]
    fn indices_are_strictly_ascending(generated: Vec<TripOffer>) {
        let indices = matching_indices(&generated, &FilterCriteria::with_max_price(900));
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn example_price_and_week_bucket_keeps_two_offers() {
        let offers = generated();
        let criteria = FilterCriteria {
            max_price: 900,
            duration_bucket: Some(DurationBucket::Week),
            category: None,
        };

        let filtered = filter_offers(&offers, &criteria);

        assert_eq!(ids(&filtered), vec![2, 3]);
    }

    #[rstest]
    fn price_ceiling_is_inclusive(generated: Vec<TripOffer>) {
        let filtered = filter_offers(&generated, &FilterCriteria::with_max_price(749));
        assert_eq!(ids(&filtered), vec![3, 4]);
    }

    #[rstest]
    #[case::short(DurationBucket::Short, vec![11, 13])]
    #[case::week(DurationBucket::Week, vec![12])]
    #[case::extended(DurationBucket::Extended, vec![10, 14, 15])]
    fn bucket_selects_matching_lengths(
        mixed_lengths: Vec<TripOffer>,
        #[case] bucket: DurationBucket,
        #[case] expected: Vec<u64>,
    ) {
        let criteria = FilterCriteria {
            duration_bucket: Some(bucket),
            ..FilterCriteria::with_max_price(u32::MAX)
        };
        assert_eq!(ids(&filter_offers(&mixed_lengths, &criteria)), expected);
    }

    #[rstest]
    fn category_is_exact_match(mixed_lengths: Vec<TripOffer>) {
        let criteria = FilterCriteria {
            category: Some(Category::Adventure),
            ..FilterCriteria::with_max_price(u32::MAX)
        };
        assert_eq!(ids(&filter_offers(&mixed_lengths, &criteria)), vec![12, 14]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        for criteria in sample_criteria() {
            assert!(filter_offers(&[], &criteria).is_empty());
        }
    }

    #[rstest]
    fn nothing_matching_yields_empty_output(generated: Vec<TripOffer>) {
        let criteria = FilterCriteria {
            duration_bucket: Some(DurationBucket::Extended),
            ..FilterCriteria::with_max_price(u32::MAX)
        };
        assert!(filter_offers(&generated, &criteria).is_empty());
    }

    #[rstest]
    fn permissive_criteria_are_identity(mixed_lengths: Vec<TripOffer>) {
        let criteria = FilterCriteria::permissive_for(&mixed_lengths);
        let filtered = filter_offers(&mixed_lengths, &criteria);

        assert_eq!(criteria.max_price, 3299);
        assert_eq!(filtered, mixed_lengths.iter().collect::<Vec<_>>());
    }

    #[rstest]
    fn every_result_satisfies_all_predicates(mixed_lengths: Vec<TripOffer>) {
        for criteria in sample_criteria() {
            let filtered = filter_offers(&mixed_lengths, &criteria);

            assert!(is_subsequence(&filtered, &mixed_lengths), "{criteria:?}");
            for kept in &filtered {
                assert!(kept.price <= criteria.max_price);
                if let Some(bucket) = criteria.duration_bucket {
                    assert!(bucket.contains(kept.duration_days()));
                }
                if let Some(category) = criteria.category {
                    assert_eq!(kept.category, category);
                }
            }
        }
    }

    #[rstest]
    fn absent_constraints_never_exclude(mixed_lengths: Vec<TripOffer>) {
        for criteria in sample_criteria() {
            let price_only = FilterCriteria::with_max_price(criteria.max_price);
            let expected: Vec<u64> = mixed_lengths
                .iter()
                .filter(|candidate| candidate.price <= criteria.max_price)
                .map(|candidate| candidate.id)
                .collect();
            assert_eq!(ids(&filter_offers(&mixed_lengths, &price_only)), expected);
        }
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(3, true)]
    #[case(4, false)]
    fn short_bucket_bounds(#[case] days: u32, #[case] expected: bool) {
        assert_eq!(DurationBucket::Short.contains(days), expected);
    }

    #[test]
    fn bucket_round_trips_through_identifier() {
        for bucket in DurationBucket::ALL {
            assert_eq!(bucket.identifier().parse::<DurationBucket>(), Ok(bucket));
        }
        assert!("2-5".parse::<DurationBucket>().is_err());
    }

    #[test]
    fn criteria_label_summarises_constraints() {
        let criteria = FilterCriteria {
            max_price: 900,
            duration_bucket: Some(DurationBucket::Week),
            category: None,
        };
        assert_eq!(criteria.label(), "Up to $900 | 4-7 days | Any type");
    }
}
