//! Search-query classification: inferring the semantic role of raw tokens.
//!
//! A search is typed as a flat list of untyped tokens. The classifier decides
//! per token, with a fixed priority, what it represents: integer parse is
//! tried first, then date parse, then the token is taken as a location name.
//! A token that is both integer-like and date-like is therefore an integer.
//! Within one kind, slots fill positionally (first date is the range start,
//! second the range end); a token whose slots are all taken is dropped with a
//! per-token error, and classification continues with the rest.

use crate::errors::QueryError;
use crate::ride::normalize_location;
use crate::tokens::{parse_date, parse_integer};
use chrono::NaiveDate;

/// The typed representation of a search, built from raw tokens.
///
/// Every field is independently optional; [`classify`] fills them. When only
/// a start date was given, the end date is set equal to it, so a single date
/// token means a single-day window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Origin location; search matches nothing without it.
    pub origin: Option<String>,
    /// Destination location.
    pub destination: Option<String>,
    /// Start of the date window, inclusive.
    pub from_date: Option<NaiveDate>,
    /// End of the date window, inclusive.
    pub to_date: Option<NaiveDate>,
    /// Minimum number of free seats.
    pub min_seats: Option<i64>,
}

/// Classifies raw search tokens into a [`SearchQuery`].
///
/// Returns the query together with any per-token errors; an error never
/// aborts classification, the offending token is simply dropped. Tokens of
/// different kinds may appear in any order; within one kind, position decides
/// which slot a token fills.
///
/// # Examples
///
/// ```
/// use ridepool::query::classify;
///
/// let (query, errors) = classify(&["Odense", "3", "Maribo"]);
/// assert!(errors.is_empty());
/// assert_eq!(query.origin.as_deref(), Some("Odense"));
/// assert_eq!(query.destination.as_deref(), Some("Maribo"));
/// assert_eq!(query.min_seats, Some(3));
/// ```
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> (SearchQuery, Vec<QueryError>) {
    let mut query = SearchQuery::default();
    let mut errors = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if let Some(number) = parse_integer(token) {
            if query.min_seats.is_none() {
                query.min_seats = Some(number);
            } else {
                errors.push(QueryError::ExtraInteger {
                    token: token.to_string(),
                });
            }
        } else if let Some(date) = parse_date(token) {
            if query.from_date.is_none() {
                query.from_date = Some(date);
            } else if query.to_date.is_none() {
                query.to_date = Some(date);
            } else {
                errors.push(QueryError::ExtraDate {
                    token: token.to_string(),
                });
            }
        } else if query.origin.is_none() {
            query.origin = Some(normalize_location(token));
        } else if query.destination.is_none() {
            query.destination = Some(normalize_location(token));
        } else {
            errors.push(QueryError::ExtraLocation {
                token: token.to_string(),
            });
        }
    }

    // A single date means a single-day window
    if query.to_date.is_none() {
        query.to_date = query.from_date;
    }

    (query, errors)
}
