//! Domain layer containing the parking entities and rules.
//!
//! # Architecture
//!
//! - [`entities`] - Vehicles, spots, size classes and the fee schedule
//! - [`clock`] - Injectable wall-clock capability
//! - [`fee`] - Pure tiered fee calculation
//!
//! The domain layer holds no orchestration; spot selection and the
//! park/remove workflow live in [`crate::application::services::ParkingLot`].

pub mod clock;
pub mod entities;
pub mod fee;
