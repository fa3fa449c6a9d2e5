//! Parking spot entity and the handle callers use to refer to one.

use super::{SpotSize, Vehicle, VehicleRef, VehicleSize};
use crate::error::ParkingError;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Process-unique identity of a parking lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LotId(pub(crate) u64);

impl fmt::Display for LotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lot-{}", self.0)
    }
}

/// Reference to a spot inside a specific lot.
///
/// Two handles are equal only when both the lot and the spot number match, so
/// a handle obtained from one lot is never accepted by another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpotHandle {
    pub lot: LotId,
    pub number: u32,
}

/// A numbered spot with a fixed capacity class and at most one occupant.
///
/// The occupant is held weakly: the spot tracks occupancy, the caller owns
/// the vehicle.
#[derive(Debug)]
pub struct ParkingSpot {
    lot: LotId,
    number: u32,
    size: SpotSize,
    occupant: Option<Weak<RefCell<Vehicle>>>,
}

impl ParkingSpot {
    pub(crate) fn new(lot: LotId, number: u32, size: SpotSize) -> Self {
        Self {
            lot,
            number,
            size,
            occupant: None,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> SpotSize {
        self.size
    }

    pub fn handle(&self) -> SpotHandle {
        SpotHandle {
            lot: self.lot,
            number: self.number,
        }
    }

    /// Size compatibility between a vehicle and this spot.
    ///
    /// - Small vehicles fit anywhere.
    /// - Medium vehicles fit anything but a small spot.
    /// - Large vehicles fit only large spots.
    pub fn can_park(&self, vehicle: &Vehicle) -> bool {
        self.accepts(vehicle.size())
    }

    pub(crate) fn accepts(&self, size: VehicleSize) -> bool {
        match size {
            VehicleSize::Small => true,
            VehicleSize::Medium => self.size != SpotSize::Small,
            VehicleSize::Large => self.size == SpotSize::Large,
        }
    }

    /// Assigns `vehicle` to this spot.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::SpotOccupied`] if the spot already has an occupant.
    pub fn park(&mut self, vehicle: &VehicleRef) -> Result<(), ParkingError> {
        if self.occupant.is_some() {
            return Err(ParkingError::SpotOccupied {
                spot: self.number,
                size: self.size,
            });
        }
        self.occupant = Some(Rc::downgrade(vehicle));
        Ok(())
    }

    /// Clears the occupant and hands back its weak handle.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::SpotAlreadyEmpty`] if there is no occupant.
    pub fn vacate(&mut self) -> Result<Weak<RefCell<Vehicle>>, ParkingError> {
        self.occupant
            .take()
            .ok_or(ParkingError::SpotAlreadyEmpty { spot: self.number })
    }

    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    /// The current occupant, if any and if its owner still holds it.
    pub fn occupant(&self) -> Option<VehicleRef> {
        self.occupant.as_ref().and_then(Weak::upgrade)
    }
}
