//! Ride creation: validating raw tokens into rides, and deriving return
//! rides from the most recent entry.
//!
//! Both entry points take raw, possibly-absent tokens and either append a
//! fully validated [`Ride`](crate::ride::Ride) to the store or return a
//! [`RideError`] describing exactly which constraint failed. On any error the
//! store is untouched; the command loop prints the message and carries on.

use crate::errors::RideError;
use crate::ride::{Ride, RideStore};
use crate::tokens::{parse_date, parse_integer};
use tracing::debug;

/// Validates four raw tokens and appends a new ride to the store.
///
/// Any argument may be absent (the command loop passes whatever positional
/// tokens the user typed). Validation order: presence of all four arguments,
/// then the date token, then the seat-count token, which must be a
/// non-negative integer. Locations are normalized on construction.
///
/// # Errors
///
/// - [`RideError::MissingArgument`] when any input is absent
/// - [`RideError::InvalidDate`] when the date token does not parse
/// - [`RideError::InvalidSeatCount`] when the seat token is not a
///   non-negative integer
///
/// # Examples
///
/// ```
/// use ridepool::ride::RideStore;
/// use ridepool::ride::factory::create_ride;
///
/// let mut store = RideStore::new();
/// create_ride(
///     &mut store,
///     Some("Odense"),
///     Some("Maribo"),
///     Some("2022-01-10"),
///     Some("3"),
/// )
/// .unwrap();
/// assert_eq!(store.len(), 1);
/// ```
pub fn create_ride(
    store: &mut RideStore,
    from: Option<&str>,
    to: Option<&str>,
    date_text: Option<&str>,
    seats_text: Option<&str>,
) -> Result<(), RideError> {
    let from = from.ok_or(RideError::MissingArgument { field: "origin" })?;
    let to = to.ok_or(RideError::MissingArgument {
        field: "destination",
    })?;
    let date_text = date_text.ok_or(RideError::MissingArgument { field: "date" })?;
    let seats_text = seats_text.ok_or(RideError::MissingArgument { field: "free-seats" })?;

    let date = parse_date(date_text).ok_or_else(|| RideError::InvalidDate {
        text: date_text.to_string(),
    })?;
    let free_seats = parse_integer(seats_text)
        .filter(|&n| n >= 0)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| RideError::InvalidSeatCount {
            text: seats_text.to_string(),
        })?;

    let ride = Ride::new(from, to, date, free_seats);
    debug!(ride = %ride, "appending ride");
    store.append(ride);
    Ok(())
}

/// Derives a return ride from the most recent ride in the store.
///
/// The new ride swaps origin and destination and carries the seat count over
/// unchanged; only the date comes from the caller. The return date must be on
/// or after the outbound date. Creation is delegated to [`create_ride`] so a
/// return ride passes exactly the same validation as a user-entered one.
///
/// # Errors
///
/// - [`RideError::NoPreviousRide`] when the store is empty
/// - [`RideError::MissingArgument`] / [`RideError::InvalidDate`] for a
///   missing or malformed date token
/// - [`RideError::ReturnDateTooEarly`] when the date precedes the outbound
///   ride's date
pub fn create_return_ride(store: &mut RideStore, date_text: Option<&str>) -> Result<(), RideError> {
    let date_text = date_text.ok_or(RideError::MissingArgument { field: "date" })?;
    let last = store.most_recent().ok_or(RideError::NoPreviousRide)?;

    let return_date = parse_date(date_text).ok_or_else(|| RideError::InvalidDate {
        text: date_text.to_string(),
    })?;
    if return_date < last.date() {
        return Err(RideError::ReturnDateTooEarly {
            return_date,
            outbound_date: last.date(),
        });
    }

    let (from, to, seats) = (
        last.to().to_string(),
        last.from().to_string(),
        last.free_seats().to_string(),
    );
    create_ride(store, Some(&from), Some(&to), Some(date_text), Some(&seats))
}
