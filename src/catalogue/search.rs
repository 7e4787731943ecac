//! Trip search requests and their (simulated) results.

use chrono::NaiveDate;
use thiserror::Error;

use super::offer::TripOffer;
use super::sample;

/// Date format accepted by the search and booking forms and used to show
/// booking dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a search form submission is rejected.
///
/// The `Display` output is shown to the user as a warning notification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// One or more required fields were blank.
    #[error("Please fill in all required fields")]
    MissingFields {
        /// Names of the blank fields, in form order.
        fields: Vec<&'static str>,
    },

    /// A date field was not in `YYYY-MM-DD` form.
    #[error("{field} must be a date like 2025-06-15")]
    InvalidDate {
        /// Name of the offending field.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// The departure date is before today.
    #[error("Departure date cannot be in the past")]
    DepartureInPast,

    /// The return date is before the departure date.
    #[error("Return date must be on or after the departure date")]
    ReturnBeforeDeparture,
}

/// Raw text captured from the quick search form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFields<'a> {
    /// Origin city.
    pub from: &'a str,
    /// Destination city.
    pub to: &'a str,
    /// Departure date text.
    pub departure: &'a str,
    /// Optional return date text.
    pub return_date: &'a str,
}

/// A validated search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Origin city.
    pub from: String,
    /// Destination city.
    pub to: String,
    /// Departure date, never before the day the search ran.
    pub departure: NaiveDate,
    /// Optional return date, never before departure.
    pub return_date: Option<NaiveDate>,
}

impl SearchRequest {
    /// Validates raw form text into a request.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingFields`] when origin, destination or
    /// departure is blank, [`SearchError::InvalidDate`] for unparseable
    /// dates, [`SearchError::DepartureInPast`] when departure precedes
    /// `today`, and [`SearchError::ReturnBeforeDeparture`] when the return
    /// date precedes departure.
    pub fn from_fields(fields: SearchFields<'_>, today: NaiveDate) -> Result<Self, SearchError> {
        let from = fields.from.trim();
        let to = fields.to.trim();
        let departure_text = fields.departure.trim();
        let return_text = fields.return_date.trim();

        let missing: Vec<&'static str> = [
            ("From", from),
            ("To", to),
            ("Departure", departure_text),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(SearchError::MissingFields { fields: missing });
        }

        let departure = parse_date("Departure", departure_text)?;
        if departure < today {
            return Err(SearchError::DepartureInPast);
        }

        let return_date = if return_text.is_empty() {
            None
        } else {
            Some(parse_date("Return", return_text)?)
        };
        if return_date.is_some_and(|date| date < departure) {
            return Err(SearchError::ReturnBeforeDeparture);
        }

        Ok(Self {
            from: from.to_owned(),
            to: to.to_owned(),
            departure,
            return_date,
        })
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, SearchError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| SearchError::InvalidDate {
        field,
        value: value.to_owned(),
    })
}

/// Produces the result set for a validated search.
///
/// Results are sample data keyed only by the city names; dates do not
/// influence them.
#[must_use]
pub fn generate_results(request: &SearchRequest) -> Vec<TripOffer> {
    sample::route_offers(&request.from, &request.to)
}
