//! Command-line front end for the parking lot model.
//!
//! # Usage
//!
//! ```bash
//! # Show the spot layout
//! cargo run -- layout
//!
//! # Park a large vehicle for five hours and print the fee
//! cargo run -- simulate --size L --minutes 300
//!
//! # Leave, come back 30 minutes later and stay another two hours
//! cargo run -- simulate --size M --minutes 60 --reenter-after 30 --second-stay 120
//! ```
//!
//! Settings come from the environment, see [`parking_lot_sim::config`].

use parking_lot_sim::config::{self, Config};
use parking_lot_sim::prelude::*;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

/// Parking lot simulator.
#[derive(Parser)]
#[command(name = "parking-lot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the size of every spot
    Layout,

    /// Park one vehicle on a simulated clock and print the fee
    Simulate {
        /// Vehicle size: S, M or L
        #[arg(short, long)]
        size: VehicleSize,

        /// Length of the stay in minutes
        #[arg(short, long, default_value_t = 60)]
        minutes: i64,

        /// Park the same vehicle again this many minutes after it leaves
        #[arg(long)]
        reenter_after: Option<i64>,

        /// Length of the second stay in minutes
        #[arg(long, default_value_t = 60, requires = "reenter_after")]
        second_stay: i64,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config)?;
    config.print_summary();

    match cli.command {
        Commands::Layout => show_layout(&config),
        Commands::Simulate {
            size,
            minutes,
            reenter_after,
            second_stay,
        } => simulate(&config, size, minutes, reenter_after, second_stay),
    }
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG directive '{}'", config.log_level))?;

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Ok(())
}

/// Builds a lot from the configuration on the given clock.
fn build_lot<C: Clock>(config: &Config, clock: C) -> Result<ParkingLot<C>> {
    let lot = match config.layout_seed {
        Some(seed) => ParkingLot::with_rng(
            config.entry_points,
            config.total_spots,
            config.fee_schedule,
            clock,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => ParkingLot::with_rng(
            config.entry_points,
            config.total_spots,
            config.fee_schedule,
            clock,
            &mut rand::rng(),
        ),
    };

    lot.context("Failed to build parking lot")
}

fn show_layout(config: &Config) -> Result<()> {
    let lot = build_lot(config, SystemClock)?;

    println!("{}", "Parking spots".bright_blue().bold());
    println!();

    for spot in lot.spots() {
        println!("  #{:<4} {}", spot.number(), paint_size(spot.size()));
    }

    println!();
    println!(
        "  {} spots, {} available",
        lot.spots().len().to_string().bright_white(),
        lot.available_spots().to_string().green()
    );

    Ok(())
}

fn simulate(
    config: &Config,
    size: VehicleSize,
    minutes: i64,
    reenter_after: Option<i64>,
    second_stay: i64,
) -> Result<()> {
    let clock = ManualClock::new(Utc::now());
    let mut lot = build_lot(config, &clock)?;
    let vehicle = Vehicle::shared(size);

    println!("{}", "Parking simulation".bright_blue().bold());
    println!();

    stay(&mut lot, &vehicle, minutes)?;

    if let Some(gap) = reenter_after {
        clock.advance(Duration::minutes(gap));
        println!("  {} after {} min", "Re-entering".yellow(), gap);
        stay(&mut lot, &vehicle, second_stay)?;
    }

    Ok(())
}

fn stay(
    lot: &mut ParkingLot<&ManualClock>,
    vehicle: &VehicleRef,
    minutes: i64,
) -> Result<()> {
    let handle = lot.park(vehicle)?;

    let spot_size = lot
        .spot(handle)
        .map(ParkingSpot::size)
        .context("Parked spot missing from lot")?;

    println!(
        "  {} {} vehicle parked at #{} ({})",
        "✓".green(),
        vehicle.borrow().size(),
        handle.number,
        paint_size(spot_size)
    );

    lot.clock().advance(Duration::minutes(minutes));
    let fee = lot.remove(handle)?;

    let waived = if vehicle.borrow().flat_rate_waived() {
        " (flat rate waived)".yellow().to_string()
    } else {
        String::new()
    };

    println!(
        "  {} left after {} min, fee: {}{}",
        "✓".green(),
        minutes,
        fee.to_string().bright_white().bold(),
        waived
    );
    println!();

    Ok(())
}

fn paint_size(size: SpotSize) -> ColoredString {
    match size {
        SpotSize::Small => size.code().cyan(),
        SpotSize::Medium => size.code().yellow(),
        SpotSize::Large => size.code().magenta(),
    }
}
