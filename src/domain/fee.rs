//! Tiered parking fee calculation.
//!
//! # Rules
//!
//! 1. The stay is billed in whole hours; any partial hour counts as a full one.
//! 2. A stay of at most three hours costs the flat rate, unless the vehicle
//!    lost the flat rate through a grace-period re-entry.
//! 3. Otherwise every complete 24-hour period costs the full-day rate, the
//!    flat rate is added once, and each remaining hour beyond the third is
//!    charged at the hourly rate of the spot's size.
//!
//! A waived vehicle with a short stay falls through to rule 3 with zero full
//! days, which yields the flat rate again.

use crate::domain::entities::{FeeSchedule, SpotSize};
use crate::error::ParkingError;
use chrono::{DateTime, TimeDelta, Utc};

const SECONDS_PER_HOUR: i64 = 3_600;
const FLAT_RATE_HOURS: u64 = 3;
const HOURS_PER_DAY: u64 = 24;

/// Whole hours between `entry` and `exit`, rounded up.
///
/// Rounding works at nanosecond resolution, so even a single nanosecond past
/// a full hour bills another hour. A negative interval counts as zero hours.
pub fn billable_hours(entry: DateTime<Utc>, exit: DateTime<Utc>) -> u64 {
    let elapsed = exit - entry;
    if elapsed <= TimeDelta::zero() {
        return 0;
    }

    let seconds = elapsed.num_seconds();
    let hours = seconds / SECONDS_PER_HOUR;
    let partial = seconds % SECONDS_PER_HOUR != 0 || elapsed.subsec_nanos() != 0;

    hours as u64 + u64::from(partial)
}

/// Computes the fee for one stay.
///
/// # Errors
///
/// Returns [`ParkingError::FeeOverflow`] if the amount does not fit in a
/// `u64` for this schedule and stay length.
pub fn calculate_fee(
    schedule: &FeeSchedule,
    entry: DateTime<Utc>,
    exit: DateTime<Utc>,
    spot_size: SpotSize,
    flat_rate_waived: bool,
) -> Result<u64, ParkingError> {
    let hours = billable_hours(entry, exit);

    if hours <= FLAT_RATE_HOURS && !flat_rate_waived {
        return Ok(schedule.flat_rate);
    }

    let full_days = hours / HOURS_PER_DAY;
    let exceeding_hours = hours % HOURS_PER_DAY;
    let overflow = || ParkingError::FeeOverflow { hours };

    let mut total = full_days
        .checked_mul(schedule.full_day_rate)
        .and_then(|days| days.checked_add(schedule.flat_rate))
        .ok_or_else(overflow)?;

    if exceeding_hours > FLAT_RATE_HOURS {
        total = (exceeding_hours - FLAT_RATE_HOURS)
            .checked_mul(schedule.hourly_rates.for_size(spot_size))
            .and_then(|extra| total.checked_add(extra))
            .ok_or_else(overflow)?;
    }

    tracing::debug!(
        hours,
        full_days,
        exceeding_hours,
        %spot_size,
        flat_rate_waived,
        total,
        "Computed tiered fee"
    );

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn entry() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap()
    }

    fn fee_after(duration: Duration, size: SpotSize, waived: bool) -> u64 {
        calculate_fee(
            &FeeSchedule::default(),
            entry(),
            entry() + duration,
            size,
            waived,
        )
        .unwrap()
    }

    #[test]
    fn test_billable_hours_rounds_up() {
        assert_eq!(billable_hours(entry(), entry()), 0);
        assert_eq!(billable_hours(entry(), entry() + Duration::seconds(1)), 1);
        assert_eq!(billable_hours(entry(), entry() + Duration::hours(1)), 1);
        assert_eq!(
            billable_hours(entry(), entry() + Duration::minutes(61)),
            2
        );
    }

    #[test]
    fn test_billable_hours_negative_interval() {
        assert_eq!(billable_hours(entry(), entry() - Duration::hours(2)), 0);
    }

    #[test]
    fn test_exactly_three_hours_is_flat_rate() {
        assert_eq!(fee_after(Duration::hours(3), SpotSize::Large, false), 40);
    }

    #[test]
    fn test_zero_length_stay_is_flat_rate() {
        assert_eq!(fee_after(Duration::zero(), SpotSize::Small, false), 40);
    }

    #[test]
    fn test_five_hours_medium() {
        assert_eq!(fee_after(Duration::hours(5), SpotSize::Medium, false), 160);
    }

    #[test]
    fn test_partial_hour_beyond_three_is_charged() {
        // 3h01m bills as 4 hours.
        assert_eq!(
            fee_after(Duration::minutes(181), SpotSize::Small, false),
            40 + 20
        );
    }

    #[test]
    fn test_twenty_six_hours_large() {
        assert_eq!(fee_after(Duration::hours(26), SpotSize::Large, false), 5040);
    }

    #[test]
    fn test_thirty_hours_small() {
        assert_eq!(fee_after(Duration::hours(30), SpotSize::Small, false), 5100);
    }

    #[test]
    fn test_exactly_one_day() {
        assert_eq!(fee_after(Duration::hours(24), SpotSize::Medium, false), 5040);
    }

    #[test]
    fn test_twenty_three_hours_medium() {
        assert_eq!(
            fee_after(Duration::hours(23), SpotSize::Medium, false),
            40 + 20 * 60
        );
    }

    #[test]
    fn test_waived_short_stay_falls_through_to_flat_rate() {
        assert_eq!(fee_after(Duration::minutes(30), SpotSize::Large, true), 40);
        assert_eq!(fee_after(Duration::hours(3), SpotSize::Medium, true), 40);
    }

    #[test]
    fn test_waived_long_stay_matches_tiered() {
        assert_eq!(
            fee_after(Duration::hours(5), SpotSize::Medium, true),
            fee_after(Duration::hours(5), SpotSize::Medium, false)
        );
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = FeeSchedule {
            flat_rate: 10,
            hourly_rates: crate::domain::entities::HourlyRates {
                small: 1,
                medium: 2,
                large: 3,
            },
            full_day_rate: 100,
        };

        let fee = calculate_fee(
            &schedule,
            entry(),
            entry() + Duration::hours(52),
            SpotSize::Large,
            false,
        )
        .unwrap();

        // 2 days + flat + (4 - 3) * 3
        assert_eq!(fee, 200 + 10 + 3);
    }

    #[test]
    fn test_billable_hours_rounds_sub_millisecond_remainder() {
        let exit = entry() + Duration::hours(3) + Duration::microseconds(500);
        assert_eq!(billable_hours(entry(), exit), 4);

        let exit = entry() + Duration::hours(2) + Duration::nanoseconds(1);
        assert_eq!(billable_hours(entry(), exit), 3);
    }

    #[test]
    fn test_full_day_rate_overflow_is_an_error() {
        let schedule = FeeSchedule {
            full_day_rate: u64::MAX / 2,
            ..FeeSchedule::default()
        };

        let result = calculate_fee(
            &schedule,
            entry(),
            entry() + Duration::hours(72),
            SpotSize::Small,
            false,
        );

        assert_eq!(result, Err(ParkingError::FeeOverflow { hours: 72 }));
    }

    #[test]
    fn test_hourly_rate_overflow_is_an_error() {
        let schedule = FeeSchedule {
            hourly_rates: crate::domain::entities::HourlyRates {
                small: u64::MAX / 4,
                medium: 0,
                large: 0,
            },
            ..FeeSchedule::default()
        };

        let result = calculate_fee(
            &schedule,
            entry(),
            entry() + Duration::hours(10),
            SpotSize::Small,
            false,
        );

        assert!(matches!(result, Err(ParkingError::FeeOverflow { hours: 10 })));
    }

    #[test]
    fn test_largest_representable_fee() {
        let schedule = FeeSchedule {
            flat_rate: 0,
            full_day_rate: u64::MAX,
            ..FeeSchedule::default()
        };

        let result = calculate_fee(
            &schedule,
            entry(),
            entry() + Duration::hours(24),
            SpotSize::Medium,
            false,
        );

        assert_eq!(result, Ok(u64::MAX));
    }
}
