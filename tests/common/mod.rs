#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use parking_lot_sim::prelude::*;

/// Fee schedule used throughout the integration tests.
pub fn fee_schedule() -> FeeSchedule {
    FeeSchedule {
        flat_rate: 40,
        hourly_rates: HourlyRates {
            small: 20,
            medium: 60,
            large: 100,
        },
        full_day_rate: 5000,
    }
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 16, 7, 30, 0).unwrap()
}

/// A lot with an explicit layout on a manual clock starting at [`start_time`].
pub fn create_test_lot<'a>(
    layout: &[SpotSize],
    clock: &'a ManualClock,
) -> ParkingLot<&'a ManualClock> {
    ParkingLot::with_layout(REQUIRED_ENTRY_POINTS, layout, fee_schedule(), clock).unwrap()
}

pub fn create_clock() -> ManualClock {
    ManualClock::new(start_time())
}
