//! Seed-data generation for interactive use and demos.
//!
//! Populates a fresh store with random rides over a fixed roster of Danish
//! locations. Every seed ride goes through the regular ride factory, so the
//! generated tokens face the same validation as user input.

use crate::constants::SEED_LOCATIONS;
use crate::ride::factory::create_ride;
use crate::ride::RideStore;
use rand::Rng;
use tracing::{debug, warn};

/// Appends `count` random rides to the store.
///
/// Origins and destinations are drawn uniformly from the location roster,
/// re-drawing the destination until it differs from the origin (the store
/// itself accepts self-loops; the seeder just avoids generating them). Dates
/// fall in January 2022 and seat counts in 1..=5.
pub fn seed_rides(store: &mut RideStore, count: usize) {
    let mut rng = rand::thread_rng();
    for _ in 0..count {
        let from = SEED_LOCATIONS[rng.gen_range(0..SEED_LOCATIONS.len())];
        let mut to = from;
        while to == from {
            to = SEED_LOCATIONS[rng.gen_range(0..SEED_LOCATIONS.len())];
        }
        let date = format!("2022-1-{}", rng.gen_range(1..=30));
        let free_seats = rng.gen_range(1..=5).to_string();

        if let Err(error) = create_ride(store, Some(from), Some(to), Some(&date), Some(&free_seats))
        {
            // Unreachable with the roster above; logged rather than ignored
            warn!(%error, "seed ride rejected");
        }
    }
    debug!(rides = store.len(), "seeding complete");
}
