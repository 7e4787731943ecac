//! Builders for catalogue fixtures shared by unit and behaviour tests.

use super::offer::{Category, Rating, TripDuration, TripOffer};

/// Builds an offer with the fields that matter to filtering.
///
/// Title, description and image are derived from the identifier so test
/// output stays readable.
#[must_use]
pub fn offer(id: u64, price: u32, days: u32, category: Category) -> TripOffer {
    TripOffer {
        id,
        title: format!("Offer {id}"),
        description: format!("{} trip", category.label()),
        price,
        duration: TripDuration::at_least_one_day(days),
        category,
        rating: Rating::from_tenths(45),
        image: format!("https://example.test/offers/{id}.jpg"),
    }
}
