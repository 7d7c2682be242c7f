/*!
# Ridepool

Ridepool is a command-line ride-sharing ledger. Users create rides (origin,
destination, date, free seats), derive return rides from the most recent
entry, list all rides, and search the list with free-text tokens whose
semantic roles (location, date, seat count) are inferred by a classifier.

## Core Features

- Create rides from loosely-typed positional tokens, validated before any
  state changes
- Derive a return ride from the last created ride with origin/destination
  swapped
- Search with unordered tokens: locations, a date or date range, a minimum
  seat count
- Interactive command loop that recovers from every malformed input

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Startup argument handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `tokens`: Total validators classifying raw tokens as dates or integers
- `ride`: The ride record, location normalization, the append-only store,
  and the ride factory
- `query`: The search-token classifier
- `search`: The search engine over the store
- `repl`: The interactive command loop
- `seed`: Random seed-data generation

## Usage Example

```rust,no_run
use ridepool::repl;
use ridepool::ride::RideStore;
use ridepool::seed::seed_rides;

fn main() -> ridepool::AppResult<()> {
    let mut store = RideStore::new();
    seed_rides(&mut store, 10);
    repl::run(&mut store)
}
```
*/

/// Command-line interface for parsing and handling startup arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Search-token classification into typed queries
pub mod query;
/// The interactive command loop
pub mod repl;
/// Ride records, the store, and the ride factory
pub mod ride;
/// The search engine over the ride store
pub mod search;
/// Seed-data generation
pub mod seed;
/// Token validators for dates and integers
pub mod tokens;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use query::SearchQuery;
pub use ride::{Ride, RideStore};
