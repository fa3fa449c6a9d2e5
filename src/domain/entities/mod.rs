//! Core domain entities of the parking facility.
//!
//! # Entity Types
//!
//! - [`Vehicle`] - A caller-owned vehicle with its latest stay timestamps
//! - [`ParkingSpot`] - A numbered spot holding at most one vehicle
//! - [`FeeSchedule`] - Flat, hourly and full-day rates
//! - [`VehicleSize`] / [`SpotSize`] - Size classes used for matching
//!
//! Spots are created only by [`crate::application::services::ParkingLot`];
//! callers refer to them through a [`SpotHandle`].

pub mod fee_schedule;
pub mod parking_spot;
pub mod size;
pub mod vehicle;

pub use fee_schedule::{FeeSchedule, HourlyRates};
pub use parking_spot::{LotId, ParkingSpot, SpotHandle};
pub use size::{SpotSize, VehicleSize};
pub use vehicle::{Vehicle, VehicleRef};
