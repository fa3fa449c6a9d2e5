//! Application layer services implementing the parking workflow.
//!
//! # Available Services
//!
//! - [`services::parking_lot::ParkingLot`] - Spot allocation, occupancy and billing

pub mod services;
