//! Parking lot orchestration: spot selection, occupancy and billing.

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::{FeeSchedule, LotId, ParkingSpot, SpotHandle, SpotSize, VehicleRef};
use crate::domain::fee::calculate_fee;
use crate::error::ParkingError;
use chrono::Duration;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// The facility always has exactly this many entry points.
pub const REQUIRED_ENTRY_POINTS: u32 = 3;

/// Re-entering within this many minutes of the last exit forfeits the flat rate.
const GRACE_PERIOD_MINUTES: i64 = 60;

static NEXT_LOT_ID: AtomicU64 = AtomicU64::new(1);

/// A fixed set of numbered spots with a fee schedule.
///
/// Spots are numbered from 1 in creation order and are never added or
/// removed; only their occupancy changes. Vehicles stay owned by the caller
/// and are passed in as [`VehicleRef`] handles.
///
/// The lot is single-threaded. Selecting a spot and assigning it is not
/// atomic, so a host that shares a lot must serialize park/remove calls.
pub struct ParkingLot<C: Clock = SystemClock> {
    id: LotId,
    spots: Vec<ParkingSpot>,
    fees: FeeSchedule,
    clock: C,
}

impl ParkingLot<SystemClock> {
    /// Creates a lot on the system clock with randomly sized spots.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::Configuration`] if `entry_points` is not 3.
    pub fn new(
        entry_points: u32,
        total_spots: u32,
        fees: FeeSchedule,
    ) -> Result<Self, ParkingError> {
        Self::with_rng(
            entry_points,
            total_spots,
            fees,
            SystemClock,
            &mut rand::rng(),
        )
    }
}

impl<C: Clock> ParkingLot<C> {
    /// Creates a lot whose spot sizes are drawn from `rng`.
    ///
    /// Each spot independently gets Small, Medium or Large with equal
    /// probability, so a seeded generator reproduces the same layout.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::Configuration`] if `entry_points` is not 3.
    /// No spot is created in that case.
    pub fn with_rng<R: Rng + ?Sized>(
        entry_points: u32,
        total_spots: u32,
        fees: FeeSchedule,
        clock: C,
        rng: &mut R,
    ) -> Result<Self, ParkingError> {
        check_entry_points(entry_points)?;

        let layout: Vec<SpotSize> = (0..total_spots)
            .map(|_| SpotSize::ALL[rng.random_range(0..SpotSize::ALL.len())])
            .collect();

        Ok(Self::from_layout(layout, fees, clock))
    }

    /// Creates a lot with an explicit spot layout, one entry per spot.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::Configuration`] if `entry_points` is not 3 or
    /// the layout has more spots than can be numbered.
    pub fn with_layout(
        entry_points: u32,
        layout: &[SpotSize],
        fees: FeeSchedule,
        clock: C,
    ) -> Result<Self, ParkingError> {
        check_entry_points(entry_points)?;

        if u32::try_from(layout.len()).is_err() {
            return Err(ParkingError::configuration(format!(
                "Too many parking spots: {}",
                layout.len()
            )));
        }

        Ok(Self::from_layout(layout.to_vec(), fees, clock))
    }

    fn from_layout(layout: Vec<SpotSize>, fees: FeeSchedule, clock: C) -> Self {
        let id = LotId(NEXT_LOT_ID.fetch_add(1, Ordering::Relaxed));

        let spots: Vec<ParkingSpot> = (1..)
            .zip(layout)
            .map(|(number, size)| ParkingSpot::new(id, number, size))
            .collect();

        tracing::info!(lot = %id, spots = spots.len(), "Parking lot created");

        Self {
            id,
            spots,
            fees,
            clock,
        }
    }

    /// Parks `vehicle` in the lowest-numbered empty spot that fits it.
    ///
    /// If the vehicle left less than an hour ago, it loses the flat rate for
    /// this stay. The entry time is always overwritten with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::NoSpotAvailable`] if no empty spot fits; the
    /// lot and the vehicle are left untouched.
    pub fn park(&mut self, vehicle: &VehicleRef) -> Result<SpotHandle, ParkingError> {
        let vehicle_size = vehicle.borrow().size();

        let Some(spot) = self
            .spots
            .iter_mut()
            .find(|spot| spot.is_available() && spot.accepts(vehicle_size))
        else {
            tracing::warn!(lot = %self.id, %vehicle_size, "No available parking spot");
            return Err(ParkingError::NoSpotAvailable { vehicle_size });
        };

        let now = self.clock.now();
        {
            let mut vehicle = vehicle.borrow_mut();
            if let Some(exit) = vehicle.exit_time()
                && now - exit < Duration::minutes(GRACE_PERIOD_MINUTES)
            {
                tracing::debug!(
                    %vehicle_size,
                    %exit,
                    "Re-entry within grace period, flat rate waived"
                );
                vehicle.waive_flat_rate();
            }
            vehicle.record_entry(now);
        }

        spot.park(vehicle)?;

        tracing::info!(
            lot = %self.id,
            spot = spot.number(),
            spot_size = %spot.size(),
            %vehicle_size,
            "Vehicle parked"
        );

        Ok(spot.handle())
    }

    /// Vacates the spot and returns the fee owed by its occupant.
    ///
    /// The occupant's exit time is set to the current time.
    ///
    /// # Errors
    ///
    /// - [`ParkingError::UnknownSpot`] if the handle does not belong to this lot
    /// - [`ParkingError::SpotAlreadyEmpty`] if nobody is parked there
    /// - [`ParkingError::VehicleReleased`] if the occupant was dropped by its
    ///   owner; the spot is vacated anyway
    /// - [`ParkingError::FeeOverflow`] if the fee does not fit the amount type;
    ///   the spot is vacated and the exit time recorded anyway
    pub fn remove(&mut self, handle: SpotHandle) -> Result<u64, ParkingError> {
        let Some(index) = self.index_of(handle) else {
            tracing::warn!(
                lot = %self.id,
                handle_lot = %handle.lot,
                spot = handle.number,
                "Unknown parking spot"
            );
            return Err(ParkingError::UnknownSpot {
                spot: handle.number,
            });
        };

        let spot = &mut self.spots[index];
        let spot_size = spot.size();
        let released = spot.vacate()?;

        let vehicle = released
            .upgrade()
            .ok_or(ParkingError::VehicleReleased {
                spot: handle.number,
            })?;

        let exit = self.clock.now();
        let mut vehicle = vehicle.borrow_mut();
        vehicle.record_exit(exit);
        let entry = vehicle.entry_time().unwrap_or(exit);

        let fee = calculate_fee(&self.fees, entry, exit, spot_size, vehicle.flat_rate_waived())
            .inspect_err(|e| {
                tracing::warn!(lot = %self.id, spot = handle.number, error = %e, "Fee calculation failed");
            })?;

        tracing::info!(
            lot = %self.id,
            spot = handle.number,
            %spot_size,
            vehicle_size = %vehicle.size(),
            fee,
            "Vehicle removed"
        );

        Ok(fee)
    }

    /// Size class of every spot, in spot-number order.
    pub fn spot_sizes(&self) -> Vec<SpotSize> {
        self.spots.iter().map(ParkingSpot::size).collect()
    }

    pub fn available_spots(&self) -> usize {
        self.spots.iter().filter(|spot| spot.is_available()).count()
    }

    pub fn spot(&self, handle: SpotHandle) -> Option<&ParkingSpot> {
        self.index_of(handle).map(|index| &self.spots[index])
    }

    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    pub fn id(&self) -> LotId {
        self.id
    }

    pub fn fee_schedule(&self) -> &FeeSchedule {
        &self.fees
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn index_of(&self, handle: SpotHandle) -> Option<usize> {
        if handle.lot != self.id {
            return None;
        }
        let index = (handle.number as usize).checked_sub(1)?;
        (index < self.spots.len()).then_some(index)
    }
}

fn check_entry_points(entry_points: u32) -> Result<(), ParkingError> {
    if entry_points != REQUIRED_ENTRY_POINTS {
        tracing::warn!(entry_points, "Rejected parking lot configuration");
        return Err(ParkingError::configuration(format!(
            "Number of entry points must be equal to {REQUIRED_ENTRY_POINTS}, got {entry_points}"
        )));
    }
    Ok(())
}
