//! Compiled-in sample data.
//!
//! There is no backend, so every offer and package the application shows
//! comes from here.

use super::error::CatalogueError;
use super::offer::{Category, Rating, TripDuration, TripOffer};
use super::packages::TravelPackage;

struct OfferSeed {
    id: u64,
    title: String,
    description: &'static str,
    price: u32,
    duration: &'static str,
    category: Category,
    rating_tenths: u8,
    image: &'static str,
}

impl TryFrom<OfferSeed> for TripOffer {
    type Error = CatalogueError;

    fn try_from(seed: OfferSeed) -> Result<Self, Self::Error> {
        Ok(Self {
            id: seed.id,
            title: seed.title,
            description: seed.description.to_owned(),
            price: seed.price,
            duration: TripDuration::parse_label(seed.duration)?,
            category: seed.category,
            rating: Rating::from_tenths(seed.rating_tenths),
            image: seed.image.to_owned(),
        })
    }
}

/// Converts seeds to offers, skipping any whose duration label is invalid.
fn build_offers(seeds: impl IntoIterator<Item = OfferSeed>) -> Vec<TripOffer> {
    seeds
        .into_iter()
        .filter_map(|seed| match TripOffer::try_from(seed) {
            Ok(offer) => Some(offer),
            Err(error) => {
                tracing::warn!("skipping sample offer: {error}");
                None
            }
        })
        .collect()
}

/// Offers shown before the first search runs.
#[must_use]
pub fn startup_offers() -> Vec<TripOffer> {
    build_offers([
        OfferSeed {
            id: 1,
            title: "Paris Weekend Getaway".to_owned(),
            description: "Romantic weekend in the City of Light",
            price: 899,
            duration: "3 days",
            category: Category::Cultural,
            rating_tenths: 48,
            image: "https://images.unsplash.com/photo-1502602898536-47ad22581b52?w=400",
        },
        OfferSeed {
            id: 2,
            title: "Tokyo Adventure".to_owned(),
            description: "Experience modern Japan and traditional culture",
            price: 1599,
            duration: "7 days",
            category: Category::Adventure,
            rating_tenths: 49,
            image: "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=400",
        },
    ])
}

/// Offers produced for a search between two cities.
#[must_use]
pub fn route_offers(from: &str, to: &str) -> Vec<TripOffer> {
    build_offers([
        OfferSeed {
            id: 1,
            title: format!("{from} to {to} - Premium Package"),
            description: "Luxury travel experience with 5-star accommodations",
            price: 1299,
            duration: "7 days",
            category: Category::Relaxation,
            rating_tenths: 48,
            image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400",
        },
        OfferSeed {
            id: 2,
            title: format!("{from} to {to} - Adventure Tour"),
            description: "Exciting adventure activities and cultural experiences",
            price: 899,
            duration: "5 days",
            category: Category::Adventure,
            rating_tenths: 46,
            image: "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=400",
        },
        OfferSeed {
            id: 3,
            title: format!("{from} to {to} - Cultural Journey"),
            description: "Immerse yourself in local culture and traditions",
            price: 749,
            duration: "4 days",
            category: Category::Cultural,
            rating_tenths: 47,
            image: "https://images.unsplash.com/photo-1503220317375-aaad61436b1b?w=400",
        },
        OfferSeed {
            id: 4,
            title: format!("{from} to {to} - Business Travel"),
            description: "Comfortable business travel with meeting facilities",
            price: 599,
            duration: "3 days",
            category: Category::Business,
            rating_tenths: 45,
            image: "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?w=400",
        },
    ])
}

fn package(
    id: u64,
    (title, description): (&str, &str),
    price: u32,
    badge: &str,
    image: &str,
    features: &[&str],
) -> TravelPackage {
    TravelPackage {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        price,
        badge: badge.to_owned(),
        image: image.to_owned(),
        features: features.iter().map(|&feature| feature.to_owned()).collect(),
    }
}

/// The curated packages listing.
#[must_use]
pub fn packages() -> Vec<TravelPackage> {
    vec![
        package(
            1,
            (
                "European Grand Tour",
                "Visit 7 countries in 14 days with expert guides and luxury accommodations.",
            ),
            3299,
            "Popular",
            "https://images.unsplash.com/photo-1467269204594-9661b134dd2b?w=400",
            &[
                "14 Days",
                "7 Countries",
                "Luxury Hotels",
                "Expert Guide",
                "All Meals",
            ],
        ),
        package(
            2,
            (
                "Asian Adventure",
                "Explore the diverse cultures and landscapes of Southeast Asia.",
            ),
            2499,
            "Adventure",
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400",
            &[
                "12 Days",
                "4 Countries",
                "Local Experiences",
                "Small Groups",
                "Cultural Tours",
            ],
        ),
        package(
            3,
            (
                "Caribbean Paradise",
                "Relax on pristine beaches and enjoy tropical island life.",
            ),
            1899,
            "Relaxation",
            "https://images.unsplash.com/photo-1502780402662-acc01917076e?w=400",
            &[
                "10 Days",
                "Beach Resort",
                "Water Sports",
                "Spa Treatments",
                "All Inclusive",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn route_offers_interpolate_cities() {
        let offers = route_offers("Berlin", "Lisbon");
        assert_eq!(offers.len(), 4);
        assert!(
            offers
                .iter()
                .all(|offer| offer.title.starts_with("Berlin to Lisbon - "))
        );
    }

    #[test]
    fn sample_ids_are_unique_per_collection() {
        for offers in [startup_offers(), route_offers("A", "B")] {
            let ids: HashSet<u64> = offers.iter().map(|offer| offer.id).collect();
            assert_eq!(ids.len(), offers.len());
        }
    }

    #[test]
    fn duration_labels_parse_to_day_counts() {
        let startup: Vec<u32> = startup_offers()
            .iter()
            .map(TripOffer::duration_days)
            .collect();
        let route: Vec<u32> = route_offers("A", "B")
            .iter()
            .map(TripOffer::duration_days)
            .collect();

        assert_eq!(startup, vec![3, 7]);
        assert_eq!(route, vec![7, 5, 4, 3]);
    }

    #[test]
    fn seed_with_unparseable_duration_is_skipped() {
        let seed = |id, duration| OfferSeed {
            id,
            title: format!("Trip {id}"),
            description: "",
            price: 100,
            duration,
            category: Category::Business,
            rating_tenths: 40,
            image: "",
        };

        let offers = build_offers([seed(1, "2 days"), seed(2, "a week"), seed(3, "0 days")]);

        assert_eq!(offers.iter().map(|offer| offer.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn packages_carry_five_features_each() {
        let listing = packages();
        assert_eq!(listing.len(), 3);
        assert!(listing.iter().all(|package| package.features.len() == 5));
    }
}
