//! Error handling utilities for the ridepool application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, the domain
//! error types `RideError` and `QueryError`, and the convenience type alias
//! `AppResult` for functions that can return these errors.
//!
//! Domain errors are recoverable by design: every failing ride or search
//! operation returns one of them to the command loop, which prints the message
//! and keeps running. Only `AppError` ever reaches `main`.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

/// Represents the error cases that can occur when creating rides.
///
/// Each variant captures the offending input so the formatted message can tell
/// the user exactly which token was rejected. These errors never terminate the
/// process; the command loop prints them and returns to the prompt with the
/// ride store unchanged.
///
/// # Examples
///
/// ```
/// use ridepool::errors::RideError;
///
/// let error = RideError::InvalidDate {
///     text: "not-a-date".to_string(),
/// };
/// assert!(format!("{}", error).contains("not-a-date"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RideError {
    /// A required positional argument was not supplied.
    #[error("Missing {field} argument. Expected: C origin destination date free-seats")]
    MissingArgument {
        /// Name of the absent argument
        field: &'static str,
    },

    /// A date token did not validate.
    #[error("'{text}' is not a valid date. Use YYYY-MM-DD or DD-MM-YYYY.")]
    InvalidDate {
        /// The rejected token
        text: String,
    },

    /// A seat-count token was not a non-negative whole number.
    #[error("'{text}' is not a valid seat count. Use a whole number of zero or more.")]
    InvalidSeatCount {
        /// The rejected token
        text: String,
    },

    /// A return ride was requested while the store was empty.
    #[error("There is no previous ride to create a return ride from.")]
    NoPreviousRide,

    /// A return ride was requested for a date before the outbound trip.
    #[error("Return date {return_date} is before the outbound date {outbound_date}. Return trips must be on the same day or later.")]
    ReturnDateTooEarly {
        /// The requested return date
        return_date: NaiveDate,
        /// The date of the ride being inverted
        outbound_date: NaiveDate,
    },
}

/// Represents per-token errors raised while classifying a search query.
///
/// The classifier assigns each token to a query slot by its inferred kind.
/// When every slot for that kind is already taken, the token is dropped and
/// one of these errors is reported; classification of the remaining tokens
/// continues regardless.
///
/// # Examples
///
/// ```
/// use ridepool::errors::QueryError;
///
/// let error = QueryError::ExtraInteger {
///     token: "3".to_string(),
/// };
/// assert!(format!("{}", error).contains("'3'"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// More than one number token; minimum seats is already set.
    #[error("Too many numbers in search: '{token}' ignored. Only one minimum seat count is allowed.")]
    ExtraInteger {
        /// The dropped token
        token: String,
    },

    /// More than two date tokens; the date range is already complete.
    #[error("Too many dates in search: '{token}' ignored. A search takes at most a start and an end date.")]
    ExtraDate {
        /// The dropped token
        token: String,
    },

    /// More than two location tokens; origin and destination are already set.
    #[error("Too many locations in search: '{token}' ignored. A search takes at most an origin and a destination.")]
    ExtraLocation {
        /// The dropped token
        token: String,
    },
}

/// Represents all possible errors that can occur in the ridepool application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use ridepool::errors::AppError;
///
/// let error = AppError::Config("Invalid seed count".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Invalid seed count");
/// ```
///
/// Converting from a ride error:
/// ```
/// use ridepool::errors::{AppError, RideError};
///
/// let app_error: AppError = RideError::NoPreviousRide.into();
/// match app_error {
///     AppError::Ride(RideError::NoPreviousRide) => {}
///     _ => panic!("Expected Ride variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to application configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors from ride creation and derivation.
    #[error("Ride error: {0}")]
    Ride(#[from] RideError),

    /// Errors related to input/output operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized result type for ridepool operations.
///
/// This type alias simplifies function signatures throughout the application
/// for operations that may fail with an `AppError`.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_ride_error_messages_name_the_offending_token() {
        let error = RideError::InvalidDate {
            text: "31-31-31".to_string(),
        };
        assert!(format!("{}", error).contains("31-31-31"));

        let error = RideError::InvalidSeatCount {
            text: "many".to_string(),
        };
        assert!(format!("{}", error).contains("many"));
    }

    #[test]
    fn test_missing_argument_message_names_the_field() {
        let error = RideError::MissingArgument { field: "date" };
        assert!(format!("{}", error).contains("date"));
    }

    #[test]
    fn test_return_date_too_early_shows_both_dates() {
        let error = RideError::ReturnDateTooEarly {
            return_date: NaiveDate::from_ymd_opt(2022, 1, 5).unwrap(),
            outbound_date: NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
        };
        let message = format!("{}", error);
        assert!(message.contains("2022-01-05"));
        assert!(message.contains("2022-01-10"));
    }

    #[test]
    fn test_query_error_messages_name_the_dropped_token() {
        let cases = [
            QueryError::ExtraInteger {
                token: "7".to_string(),
            },
            QueryError::ExtraDate {
                token: "2022-01-03".to_string(),
            },
            QueryError::ExtraLocation {
                token: "Odense".to_string(),
            },
        ];
        for error in &cases {
            let message = format!("{}", error);
            assert!(message.contains("ignored"), "message: {}", message);
        }
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "stream closed");
        let app_error: AppError = io_error.into();
        match app_error {
            AppError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected Io variant"),
        }
    }
}
