//! Command-line interface for parsing startup arguments.
//!
//! Only startup behavior is configured here; the five interactive commands
//! (list, create, return, search, exit) are read from stdin by the command
//! loop, not modeled as clap subcommands.

use clap::Parser;

/// A command-line ride-sharing ledger
#[derive(Parser, Debug)]
#[clap(name = "ridepool", about = "A command-line ride-sharing ledger")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Start with an empty ride list instead of generated seed data
    #[clap(long)]
    pub no_seed: bool,

    /// Number of seed rides to generate (overrides RIDEPOOL_SEED_COUNT)
    #[clap(long, conflicts_with = "no_seed")]
    pub seed_count: Option<usize>,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
