//! In-memory booking ledger.
//!
//! Bookings are never persisted. Each confirmed booking receives an
//! identifier synthesised from the confirmation timestamp in epoch
//! milliseconds, bumped when necessary so identifiers stay strictly
//! increasing within one ledger.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::catalogue::{DATE_FORMAT, TravelPackage, TripOffer};

/// Traveller count used when the booking form leaves the field blank.
pub const DEFAULT_TRAVELLERS: u32 = 2;

/// Reasons a booking form submission is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    /// The travel date was not in `YYYY-MM-DD` form.
    #[error("Travel date must be a date like 2025-06-15")]
    InvalidDate {
        /// The text that failed to parse.
        value: String,
    },

    /// The traveller count was not a positive whole number.
    #[error("Travellers must be a whole number of at least 1")]
    InvalidTravellers {
        /// The text that failed to parse.
        value: String,
    },
}

/// Confirmation state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// The booking is confirmed.
    Confirmed,
    /// The booking awaits confirmation.
    Pending,
}

impl BookingStatus {
    /// Returns the label shown on booking cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The offer or package a booking is being made for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingTarget {
    /// Title copied onto the booking.
    pub title: String,
    /// Price copied onto the booking.
    pub price: u32,
}

impl From<&TripOffer> for BookingTarget {
    fn from(offer: &TripOffer) -> Self {
        Self {
            title: offer.title.clone(),
            price: offer.price,
        }
    }
}

impl From<&TravelPackage> for BookingTarget {
    fn from(package: &TravelPackage) -> Self {
        Self {
            title: package.title.clone(),
            price: package.price,
        }
    }
}

/// A validated booking form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// What is being booked.
    pub target: BookingTarget,
    /// Travel date.
    pub date: NaiveDate,
    /// Number of travellers, at least one.
    pub travellers: u32,
}

impl BookingRequest {
    /// Validates raw booking form text.
    ///
    /// A blank traveller field defaults to [`DEFAULT_TRAVELLERS`].
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidDate`] when the date is not
    /// `YYYY-MM-DD`, or [`BookingError::InvalidTravellers`] when the count is
    /// not a positive integer.
    pub fn from_form(
        target: BookingTarget,
        date_text: &str,
        travellers_text: &str,
    ) -> Result<Self, BookingError> {
        let date_trimmed = date_text.trim();
        let date = NaiveDate::parse_from_str(date_trimmed, DATE_FORMAT).map_err(|_| {
            BookingError::InvalidDate {
                value: date_trimmed.to_owned(),
            }
        })?;

        let travellers_trimmed = travellers_text.trim();
        let travellers = if travellers_trimmed.is_empty() {
            DEFAULT_TRAVELLERS
        } else {
            travellers_trimmed
                .parse::<u32>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or_else(|| BookingError::InvalidTravellers {
                    value: travellers_trimmed.to_owned(),
                })?
        };

        Ok(Self {
            target,
            date,
            travellers,
        })
    }
}

/// A recorded booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Timestamp-derived identifier.
    pub id: u64,
    /// Title of the booked offer or package.
    pub title: String,
    /// Travel date.
    pub date: NaiveDate,
    /// Number of travellers.
    pub travellers: u32,
    /// Price of the booked offer or package.
    pub price: u32,
    /// Confirmation state.
    pub status: BookingStatus,
}

/// Ordered list of bookings made during this session.
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bookings: Vec::new(),
        }
    }

    /// Records a confirmed booking made at `now` and returns a copy of it.
    pub fn confirm(&mut self, request: BookingRequest, now: DateTime<Utc>) -> Booking {
        let id = self.next_id(now);
        let BookingRequest {
            target,
            date,
            travellers,
        } = request;
        let booking = Booking {
            id,
            title: target.title,
            date,
            travellers,
            price: target.price,
            status: BookingStatus::Confirmed,
        };
        self.bookings.push(booking.clone());
        booking
    }

    fn next_id(&self, now: DateTime<Utc>) -> u64 {
        let stamp = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        match self.bookings.last() {
            Some(last) if stamp <= last.id => last.id.saturating_add(1),
            _ => stamp,
        }
    }

    /// Returns all bookings in the order they were made.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Returns the number of bookings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Returns true when no bookings have been made.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn target() -> BookingTarget {
        BookingTarget {
            title: "European Grand Tour".to_owned(),
            price: 3299,
        }
    }

    fn at_millis(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    fn blank_travellers_default_to_two(target: BookingTarget) {
        let request =
            BookingRequest::from_form(target, "2025-06-15", "  ").expect("form should validate");
        assert_eq!(request.travellers, DEFAULT_TRAVELLERS);
        assert_eq!(
            request.date,
            NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
        );
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-3")]
    #[case::words("four")]
    fn invalid_travellers_are_rejected(target: BookingTarget, #[case] travellers: &str) {
        assert_eq!(
            BookingRequest::from_form(target, "2025-06-15", travellers),
            Err(BookingError::InvalidTravellers {
                value: travellers.to_owned()
            })
        );
    }

    #[rstest]
    fn invalid_date_is_rejected(target: BookingTarget) {
        assert_eq!(
            BookingRequest::from_form(target, "next week", "2"),
            Err(BookingError::InvalidDate {
                value: "next week".to_owned()
            })
        );
    }

    #[rstest]
    fn confirm_appends_confirmed_booking(target: BookingTarget) {
        let mut ledger = BookingLedger::new();
        let request =
            BookingRequest::from_form(target, "2025-06-15", "3").expect("form should validate");

        let booking = ledger.confirm(request, at_millis(1_750_000_000_000));

        assert_eq!(booking.id, 1_750_000_000_000);
        assert_eq!(booking.title, "European Grand Tour");
        assert_eq!(booking.price, 3299);
        assert_eq!(booking.travellers, 3);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(ledger.bookings(), &[booking]);
    }

    #[rstest]
    fn ids_stay_unique_within_the_same_millisecond(target: BookingTarget) {
        let mut ledger = BookingLedger::new();
        let now = at_millis(1_750_000_000_000);
        for _ in 0..3 {
            let request = BookingRequest::from_form(target.clone(), "2025-06-15", "")
                .expect("form should validate");
            ledger.confirm(request, now);
        }

        let ids: Vec<u64> = ledger.bookings().iter().map(|booking| booking.id).collect();
        assert_eq!(
            ids,
            vec![1_750_000_000_000, 1_750_000_000_001, 1_750_000_000_002]
        );
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = BookingLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }
}
