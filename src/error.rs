//! Error taxonomy for parking operations.
//!
//! Every failure is surfaced to the caller as a [`ParkingError`]; nothing is
//! retried or swallowed inside the library.

use crate::domain::entities::{SpotSize, VehicleSize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParkingError {
    /// The facility was configured with an unsupported shape.
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    /// No empty spot accepts the vehicle, either because the lot is full or
    /// because every free spot is too small.
    #[error("No available parking spot for a {vehicle_size} vehicle")]
    NoSpotAvailable { vehicle_size: VehicleSize },

    /// The spot handle does not belong to this lot.
    #[error("Parking spot #{spot} does not exist in this lot")]
    UnknownSpot { spot: u32 },

    #[error("Parking spot #{spot} is already empty")]
    SpotAlreadyEmpty { spot: u32 },

    #[error("Parking spot #{spot} ({size}) is already occupied")]
    SpotOccupied { spot: u32, size: SpotSize },

    #[error("Unknown vehicle size: '{value}'")]
    UnknownVehicleSize { value: String },

    #[error("Unknown parking spot size: '{value}'")]
    UnknownSpotSize { value: String },

    /// The fee for a stay exceeds the representable amount for this schedule.
    #[error("Parking fee for a {hours} hour stay overflows the fee amount")]
    FeeOverflow { hours: u64 },

    /// The occupant was dropped by its owner while still parked. The spot has
    /// been vacated but no fee can be computed.
    #[error("Vehicle parked at spot #{spot} was released before removal")]
    VehicleReleased { spot: u32 },
}

impl ParkingError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
