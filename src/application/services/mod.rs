//! Business logic services for the application layer.

pub mod parking_lot;

pub use parking_lot::{ParkingLot, REQUIRED_ENTRY_POINTS};
