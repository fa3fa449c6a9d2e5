//! Fee schedule configuration.

use super::SpotSize;
use serde::{Deserialize, Serialize};

/// Per-hour rates keyed by spot size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRates {
    #[serde(rename = "SP")]
    pub small: u64,
    #[serde(rename = "MP")]
    pub medium: u64,
    #[serde(rename = "LP")]
    pub large: u64,
}

impl HourlyRates {
    pub fn for_size(&self, size: SpotSize) -> u64 {
        match size {
            SpotSize::Small => self.small,
            SpotSize::Medium => self.medium,
            SpotSize::Large => self.large,
        }
    }
}

/// Rates applied when a vehicle leaves the lot.
///
/// All amounts share one currency unit. The schedule is handed to the lot at
/// construction and never changes afterwards.
///
/// Deserializes from JSON such as:
///
/// ```json
/// { "first_3_hours": 40, "hourly_rates": { "SP": 20, "MP": 60, "LP": 100 }, "full_day": 5000 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Charge covering stays of up to three hours.
    #[serde(rename = "first_3_hours")]
    pub flat_rate: u64,
    #[serde(alias = "hourlyRates")]
    pub hourly_rates: HourlyRates,
    /// Charge per complete 24-hour period.
    #[serde(rename = "full_day")]
    pub full_day_rate: u64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            flat_rate: 40,
            hourly_rates: HourlyRates {
                small: 20,
                medium: 60,
                large: 100,
            },
            full_day_rate: 5000,
        }
    }
}
