//! Vehicle entity.

use super::VehicleSize;
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a caller-owned vehicle.
///
/// Parking spots only ever hold a `Weak` copy of this handle.
pub type VehicleRef = Rc<RefCell<Vehicle>>;

/// A vehicle with a fixed size class and the timestamps of its latest stay.
///
/// Timestamps and the flat-rate flag are written only by
/// [`crate::application::services::ParkingLot`] during park and remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    size: VehicleSize,
    entry_time: Option<DateTime<Utc>>,
    exit_time: Option<DateTime<Utc>>,
    flat_rate_waived: bool,
}

impl Vehicle {
    /// Creates a vehicle that has never been parked.
    pub fn new(size: VehicleSize) -> Self {
        Self {
            size,
            entry_time: None,
            exit_time: None,
            flat_rate_waived: false,
        }
    }

    /// Creates a vehicle wrapped in a shareable [`VehicleRef`].
    pub fn shared(size: VehicleSize) -> VehicleRef {
        Rc::new(RefCell::new(Self::new(size)))
    }

    pub fn size(&self) -> VehicleSize {
        self.size
    }

    pub fn entry_time(&self) -> Option<DateTime<Utc>> {
        self.entry_time
    }

    pub fn exit_time(&self) -> Option<DateTime<Utc>> {
        self.exit_time
    }

    /// True once the vehicle re-entered within an hour of its last exit.
    pub fn flat_rate_waived(&self) -> bool {
        self.flat_rate_waived
    }

    pub(crate) fn record_entry(&mut self, at: DateTime<Utc>) {
        self.entry_time = Some(at);
    }

    pub(crate) fn record_exit(&mut self, at: DateTime<Utc>) {
        self.exit_time = Some(at);
    }

    pub(crate) fn waive_flat_rate(&mut self) {
        self.flat_rate_waived = true;
    }
}
