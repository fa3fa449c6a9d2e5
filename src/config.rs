//! Facility configuration loaded from environment variables.
//!
//! ```bash
//! export PARKING_ENTRY_POINTS=3
//! export PARKING_TOTAL_SPOTS=5
//! export PARKING_FEE_SCHEDULE="./fees.json"
//! export PARKING_LAYOUT_SEED=42
//! ```
//!
//! ## Optional Variables
//!
//! - `PARKING_ENTRY_POINTS` - Number of entry points (default: 3)
//! - `PARKING_TOTAL_SPOTS` - Number of spots (default: 5, range: 1-10000)
//! - `PARKING_FEE_SCHEDULE` - Path to a JSON fee schedule (default: built-in rates)
//! - `PARKING_LAYOUT_SEED` - Seed for the spot layout (default: random)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! The entry-point count is passed through unchecked; the lot itself rejects
//! anything other than 3 when it is built.

use crate::domain::entities::FeeSchedule;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

const MAX_TOTAL_SPOTS: u32 = 10_000;

/// Facility configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub entry_points: u32,
    pub total_spots: u32,
    pub fee_schedule: FeeSchedule,
    /// Seed for the spot layout. `None` draws from the thread RNG.
    pub layout_seed: Option<u64>,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry_points: 3,
            total_spots: 5,
            fee_schedule: FeeSchedule::default(),
            layout_seed: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or the fee
    /// schedule file cannot be read or decoded.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let entry_points = parse_var("PARKING_ENTRY_POINTS")?.unwrap_or(defaults.entry_points);
        let total_spots = parse_var("PARKING_TOTAL_SPOTS")?.unwrap_or(defaults.total_spots);
        let layout_seed = parse_var("PARKING_LAYOUT_SEED")?;

        let fee_schedule = match env::var("PARKING_FEE_SCHEDULE") {
            Ok(path) => load_fee_schedule(Path::new(&path))
                .with_context(|| format!("Failed to load fee schedule from '{path}'"))?,
            Err(_) => defaults.fee_schedule,
        };

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            entry_points,
            total_spots,
            fee_schedule,
            layout_seed,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `total_spots` is 0 or above 10000
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.total_spots == 0 {
            anyhow::bail!("PARKING_TOTAL_SPOTS must be at least 1");
        }

        if self.total_spots > MAX_TOTAL_SPOTS {
            anyhow::bail!(
                "PARKING_TOTAL_SPOTS is too large (max: {}), got {}",
                MAX_TOTAL_SPOTS,
                self.total_spots
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Entry points: {}", self.entry_points);
        tracing::info!("  Total spots: {}", self.total_spots);
        match self.layout_seed {
            Some(seed) => tracing::info!("  Layout seed: {}", seed),
            None => tracing::info!("  Layout seed: random"),
        }
        tracing::info!(
            "  Fees: flat {} / hourly SP {} MP {} LP {} / full day {}",
            self.fee_schedule.flat_rate,
            self.fee_schedule.hourly_rates.small,
            self.fee_schedule.hourly_rates.medium,
            self.fee_schedule.hourly_rates.large,
            self.fee_schedule.full_day_rate
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads a JSON fee schedule from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid schedule.
pub fn load_fee_schedule(path: &Path) -> Result<FeeSchedule> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).context("Invalid fee schedule JSON")
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
