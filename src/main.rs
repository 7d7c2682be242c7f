/*!
# Ridepool - A Command-Line Ride-Sharing Ledger

Ridepool keeps an in-memory list of offered rides and lets the user create,
derive, list and search them through an interactive prompt.

This file contains the main application flow, coordinating the various
components to implement the ledger functionality.

## Usage

```
ridepool [OPTIONS]

Options:
      --no-seed            Start with an empty ride list instead of seed data
      --seed-count <N>     Number of seed rides to generate
  -v, --verbose            Enable verbose output
  -h, --help               Print help information
  -V, --version            Print version information
```

Once running, the prompt accepts five commands:
`L` (list), `C origin destination date free-seats` (create),
`R date` (return ride), `S tokens...` (search), `0` (exit).

## Configuration

- `RIDEPOOL_SEED_COUNT`: number of seed rides (defaults to 10)
- `RUST_LOG`: log filter for diagnostic output on stderr
*/

use ridepool::cli::CliArgs;
use ridepool::config::Config;
use ridepool::errors::AppResult;
use ridepool::repl;
use ridepool::ride::RideStore;
use ridepool::seed::seed_rides;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the ridepool application.
///
/// Coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging to stderr (stdout is reserved for the prompt)
/// 3. Loads and validates configuration
/// 4. Seeds the ride store unless disabled
/// 5. Runs the interactive command loop until the exit command
///
/// # Errors
///
/// Returns an `AppError` for invalid configuration or for I/O failures while
/// reading stdin. Malformed interactive input is recovered inside the loop
/// and never reaches here.
fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting ridepool");
    debug!(?args, "CLI arguments");

    let mut config = Config::load()?;
    if let Some(count) = args.seed_count {
        config.seed_count = count;
    }
    config.validate()?;

    let mut store = RideStore::new();
    if args.no_seed {
        debug!("seeding disabled");
    } else {
        seed_rides(&mut store, config.seed_count);
        info!(rides = store.len(), "seeded ride store");
    }

    repl::run(&mut store)?;

    info!("Exiting ridepool");
    Ok(())
}
