//! The search engine: filtering the ride store against a classified query.

use crate::query::SearchQuery;
use crate::ride::{Ride, RideStore};
use tracing::debug;

/// Returns the rides matching every applicable constraint of the query, in
/// insertion order.
///
/// A ride matches when all of the following hold:
/// 1. the query origin is set and equals the ride's origin,
/// 2. the query destination, if set, equals the ride's destination,
/// 3. if a date window is set, the ride's date falls within it (inclusive),
/// 4. if a minimum seat count is set, the ride offers at least that many.
///
/// A query without an origin matches nothing. This mirrors the historical
/// behavior of the system (the origin guard was never made conditional) and
/// is kept for compatibility; it does not mean "origin unconstrained".
///
/// # Examples
///
/// ```
/// use ridepool::query::classify;
/// use ridepool::ride::factory::create_ride;
/// use ridepool::ride::RideStore;
/// use ridepool::search::search;
///
/// let mut store = RideStore::new();
/// create_ride(&mut store, Some("Odense"), Some("Maribo"), Some("2022-01-10"), Some("3")).unwrap();
///
/// let (query, _) = classify(&["Odense"]);
/// assert_eq!(search(&store, &query).len(), 1);
///
/// let (query, _) = classify(&["3"]);
/// assert!(search(&store, &query).is_empty());
/// ```
pub fn search<'a>(store: &'a RideStore, query: &SearchQuery) -> Vec<&'a Ride> {
    let results: Vec<&Ride> = store
        .iter()
        .filter(|ride| matches(ride, query))
        .collect();
    debug!(
        results = results.len(),
        total = store.len(),
        "search completed"
    );
    results
}

fn matches(ride: &Ride, query: &SearchQuery) -> bool {
    match &query.origin {
        Some(origin) if origin == ride.from() => {}
        _ => return false,
    }
    if let Some(destination) = &query.destination {
        if destination != ride.to() {
            return false;
        }
    }
    if let Some(from_date) = query.from_date {
        // classify guarantees to_date is set whenever from_date is
        let to_date = query.to_date.unwrap_or(from_date);
        if ride.date() < from_date || ride.date() > to_date {
            return false;
        }
    }
    if let Some(min_seats) = query.min_seats {
        if i64::from(ride.free_seats()) < min_seats {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::classify;
    use crate::ride::factory::create_ride;
    use chrono::NaiveDate;

    fn store_with(rides: &[(&str, &str, &str, &str)]) -> RideStore {
        let mut store = RideStore::new();
        for (from, to, date, seats) in rides {
            create_ride(&mut store, Some(from), Some(to), Some(date), Some(seats)).unwrap();
        }
        store
    }

    fn sample_store() -> RideStore {
        store_with(&[
            ("Odense", "Maribo", "2022-01-10", "3"),
            ("Odense", "Nakskov", "2022-01-15", "1"),
            ("Maribo", "Odense", "2022-01-12", "2"),
            ("Odense", "Maribo", "2022-01-20", "4"),
        ])
    }

    #[test]
    fn test_origin_only_matches_regardless_of_date() {
        let store = sample_store();
        let (query, _) = classify(&["Odense"]);
        let results = search(&store, &query);
        assert_eq!(results.len(), 3);
        // Insertion order is preserved
        let dates: Vec<NaiveDate> = results.iter().map(|r| r.date()).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
                NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
                NaiveDate::from_ymd_opt(2022, 1, 20).unwrap(),
            ]
        );
    }

    #[test]
    fn test_missing_origin_matches_nothing() {
        let store = sample_store();
        // Only an integer token: no origin can be resolved
        let (query, _) = classify(&["2"]);
        assert!(search(&store, &query).is_empty());

        let empty = SearchQuery::default();
        assert!(search(&store, &empty).is_empty());
    }

    #[test]
    fn test_destination_narrows_results() {
        let store = sample_store();
        let (query, _) = classify(&["Odense", "Maribo"]);
        let results = search(&store, &query);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.to() == "Maribo"));
    }

    #[test]
    fn test_single_date_narrows_to_that_day() {
        let store = sample_store();
        let (query, _) = classify(&["Odense", "2022-01-10"]);
        let results = search(&store, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].date(),
            NaiveDate::from_ymd_opt(2022, 1, 10).unwrap()
        );
    }

    #[test]
    fn test_date_range_is_inclusive_on_both_ends() {
        let store = sample_store();
        let (query, _) = classify(&["Odense", "2022-01-10", "2022-01-15"]);
        let results = search(&store, &query);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_min_seats_filters() {
        let store = sample_store();
        let (query, _) = classify(&["Odense", "2"]);
        let results = search(&store, &query);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.free_seats() >= 2));
    }

    #[test]
    fn test_all_constraints_combined() {
        let store = sample_store();
        let (query, _) = classify(&["Odense", "Maribo", "2022-01-01", "2022-01-31", "4"]);
        let results = search(&store, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].free_seats(), 4);
    }

    #[test]
    fn test_case_insensitive_origin_matching_via_normalization() {
        let store = store_with(&[("ODENSE", "maribo", "2022-01-10", "3")]);
        for token in ["odense", "ODENSE", "Odense"] {
            let (query, _) = classify(&[token]);
            assert_eq!(search(&store, &query).len(), 1, "token: {}", token);
        }
    }

    #[test]
    fn test_no_overlap_yields_empty() {
        let store = sample_store();
        let (query, _) = classify(&["Odense", "2023-06-01"]);
        assert!(search(&store, &query).is_empty());
    }
}
