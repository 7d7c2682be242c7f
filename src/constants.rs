//! Constants used throughout the application.
//!
//! This module contains all constants used in the ridepool application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "ridepool";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A command-line ride-sharing ledger";

// Configuration Keys & Environment Variables
/// Environment variable overriding the number of seed rides.
pub const ENV_VAR_SEED_COUNT: &str = "RIDEPOOL_SEED_COUNT";

// Seeding
/// Default number of rides generated at startup.
pub const DEFAULT_SEED_COUNT: usize = 10;
/// Upper bound on the seed ride count accepted from configuration.
pub const MAX_SEED_COUNT: usize = 10_000;
/// Locations the seed generator draws from.
pub const SEED_LOCATIONS: &[&str] = &[
    "Copenhagen",
    "Århus",
    "Odense",
    "Maribo",
    "Nakskov",
    "Vordingborg",
    "Næstved",
    "Ringsted",
];

// Date/Time Logic
/// Date format string for year-first dates (YYYY-MM-DD), tried first.
pub const DATE_FORMAT_YEAR_FIRST: &str = "%Y-%m-%d";
/// Date format string for day-first dates (DD-MM-YYYY), tried as a fallback.
pub const DATE_FORMAT_DAY_FIRST: &str = "%d-%m-%Y";
/// Number of `-`-separated components a date token must have.
pub const DATE_COMPONENT_COUNT: usize = 3;

// Command Loop
/// Banner printed once at startup, one line per entry.
pub const BANNER: &[&str] = &[
    "Welcome to the ridepool ride sharing app",
    "Program accepts the following commands:",
    "L - List all rides",
    "C (followed by 'origin destination date free-seats') - Create a new ride",
    "R (followed by 'date') - Create a return ride for the last ride in the list",
    "S (followed by parameters) - Search through the list",
    "0 - exit application",
];
/// Printed when the exit command is received.
pub const EXIT_MESSAGE: &str = "Program terminated";
/// Printed when the first token of a line is not a known command.
pub const UNKNOWN_COMMAND_MESSAGE: &str = "Input is invalid, try again";
