//! Configuration management for the ridepool application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. Command-line flags take
//! precedence over the environment; the precedence itself is applied in
//! `main`, this module only knows about the environment.
//!
//! # Environment Variables
//!
//! - `RIDEPOOL_SEED_COUNT`: Number of seed rides generated at startup
//!   (defaults to 10)

use crate::constants::{DEFAULT_SEED_COUNT, ENV_VAR_SEED_COUNT, MAX_SEED_COUNT};
use crate::errors::{AppError, AppResult};
use std::env;

/// Configuration for the ridepool application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use ridepool::Config;
///
/// let config = Config { seed_count: 25 };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of rides the seed generator creates at startup.
    ///
    /// Loaded from `RIDEPOOL_SEED_COUNT`, defaulting to 10. The `--seed-count`
    /// flag overrides it and `--no-seed` disables seeding entirely.
    pub seed_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_count: DEFAULT_SEED_COUNT,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a variable is set but does not parse.
    pub fn load() -> AppResult<Self> {
        let seed_count = match env::var(ENV_VAR_SEED_COUNT) {
            Ok(raw) => raw.parse::<usize>().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_VAR_SEED_COUNT, raw
                ))
            })?,
            Err(_) => DEFAULT_SEED_COUNT,
        };
        Ok(Config { seed_count })
    }

    /// Validates the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the seed count exceeds the supported
    /// maximum.
    pub fn validate(&self) -> AppResult<()> {
        if self.seed_count > MAX_SEED_COUNT {
            return Err(AppError::Config(format!(
                "Seed count {} exceeds the maximum of {}",
                self.seed_count, MAX_SEED_COUNT
            )));
        }
        Ok(())
    }
}
