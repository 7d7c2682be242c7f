//! Ride records and the in-memory ride store.
//!
//! A [`Ride`] is immutable once constructed and can only be built with
//! already-validated fields; the raw-token validation lives in
//! [`factory`](crate::ride::factory). The [`RideStore`] is an ordered,
//! append-only sequence whose insertion order is meaningful: the last element
//! is the "most recent" ride, which return-ride derivation inverts.

pub mod factory;

use chrono::NaiveDate;
use std::fmt;

/// Normalizes a location name to its canonical capitalization.
///
/// Trims surrounding whitespace, lowercases the remainder and uppercases the
/// first character, so `"ODENSE"`, `"odense"` and `"Odense"` all become
/// `"Odense"` and are mutually matchable in search. Works for non-ASCII
/// initials such as `"århus"` → `"Århus"`.
///
/// # Examples
///
/// ```
/// use ridepool::ride::normalize_location;
///
/// assert_eq!(normalize_location("ODENSE"), "Odense");
/// assert_eq!(normalize_location("  maribo "), "Maribo");
/// assert_eq!(normalize_location("århus"), "Århus");
/// ```
pub fn normalize_location(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => lowered,
    }
}

/// A single offered trip: origin, destination, calendar date, seat capacity.
///
/// Fields are private and exposed through accessors; a `Ride` cannot be
/// mutated after construction, and construction is only reachable through the
/// factory, so every ride in a store has passed validation. Rendered by
/// `Display` as `from to date free_seats`, the line format used by the list
/// and search commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ride {
    from: String,
    to: String,
    date: NaiveDate,
    free_seats: u32,
}

impl Ride {
    /// Builds a ride from validated fields, normalizing both locations.
    pub(crate) fn new(from: &str, to: &str, date: NaiveDate, free_seats: u32) -> Self {
        Ride {
            from: normalize_location(from),
            to: normalize_location(to),
            date,
            free_seats,
        }
    }

    /// The normalized origin location.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The normalized destination location.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// The date the ride departs.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The number of free seats offered.
    pub fn free_seats(&self) -> u32 {
        self.free_seats
    }
}

impl fmt::Display for Ride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.from, self.to, self.date, self.free_seats
        )
    }
}

/// An ordered, append-only sequence of rides.
///
/// The store supports exactly two mutations-free observations (iteration and
/// the most recent ride) and one mutation (append). There is no deletion and
/// no indexing by field; the search engine scans the sequence in insertion
/// order. The command loop owns the only instance and passes it by reference
/// to every operation, so no global state or locking is involved.
///
/// # Examples
///
/// ```
/// use ridepool::ride::RideStore;
///
/// let store = RideStore::new();
/// assert!(store.is_empty());
/// assert!(store.most_recent().is_none());
/// ```
#[derive(Debug, Default)]
pub struct RideStore {
    rides: Vec<Ride>,
}

impl RideStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a ride, preserving insertion order.
    pub(crate) fn append(&mut self, ride: Ride) {
        self.rides.push(ride);
    }

    /// The most recently appended ride, if any.
    pub fn most_recent(&self) -> Option<&Ride> {
        self.rides.last()
    }

    /// Iterates over all rides in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Ride> {
        self.rides.iter()
    }

    /// Number of rides in the store.
    pub fn len(&self) -> usize {
        self.rides.len()
    }

    /// Whether the store holds no rides.
    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_location_case_folds() {
        assert_eq!(normalize_location("ODENSE"), "Odense");
        assert_eq!(normalize_location("odense"), "Odense");
        assert_eq!(normalize_location("Odense"), "Odense");
        assert_eq!(normalize_location("oDeNsE"), "Odense");
    }

    #[test]
    fn test_normalize_location_trims_and_handles_unicode() {
        assert_eq!(normalize_location("  næstved\t"), "Næstved");
        assert_eq!(normalize_location("århus"), "Århus");
        assert_eq!(normalize_location(""), "");
    }

    #[test]
    fn test_ride_display_is_the_list_line_format() {
        let ride = Ride::new("odense", "MARIBO", date(2022, 1, 10), 3);
        assert_eq!(format!("{}", ride), "Odense Maribo 2022-01-10 3");
    }

    #[test]
    fn test_ride_construction_normalizes_both_endpoints() {
        let ride = Ride::new(" COPENHAGEN", "ringsted ", date(2022, 1, 1), 1);
        assert_eq!(ride.from(), "Copenhagen");
        assert_eq!(ride.to(), "Ringsted");
    }

    #[test]
    fn test_store_preserves_insertion_order_and_most_recent() {
        let mut store = RideStore::new();
        store.append(Ride::new("Odense", "Maribo", date(2022, 1, 10), 3));
        store.append(Ride::new("Maribo", "Nakskov", date(2022, 1, 12), 2));

        assert_eq!(store.len(), 2);
        let froms: Vec<&str> = store.iter().map(|r| r.from()).collect();
        assert_eq!(froms, vec!["Odense", "Maribo"]);
        assert_eq!(store.most_recent().unwrap().from(), "Maribo");
    }

    #[test]
    fn test_self_loop_rides_are_not_rejected() {
        // Origin and destination need not differ; only the seeder avoids them
        let mut store = RideStore::new();
        store.append(Ride::new("Odense", "Odense", date(2022, 1, 10), 3));
        assert_eq!(store.len(), 1);
    }
}
