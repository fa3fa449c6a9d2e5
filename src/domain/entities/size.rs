//! Size classes for vehicles and parking spots.
//!
//! The two enums share the same three classes but stay distinct types: a
//! vehicle's size is what it needs, a spot's size is what it can hold.

use crate::error::ParkingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size classification of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleSize {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl VehicleSize {
    pub const ALL: [VehicleSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn code(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

impl fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses a vehicle size from its code (`S`, `M`, `L`) or its name.
///
/// # Errors
///
/// Returns [`ParkingError::UnknownVehicleSize`] for anything else.
impl FromStr for VehicleSize {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "small" => Ok(Self::Small),
            "m" | "medium" => Ok(Self::Medium),
            "l" | "large" => Ok(Self::Large),
            _ => Err(ParkingError::UnknownVehicleSize {
                value: s.to_string(),
            }),
        }
    }
}

/// Capacity class of a parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotSize {
    #[serde(rename = "SP")]
    Small,
    #[serde(rename = "MP")]
    Medium,
    #[serde(rename = "LP")]
    Large,
}

impl SpotSize {
    pub const ALL: [SpotSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn code(self) -> &'static str {
        match self {
            Self::Small => "SP",
            Self::Medium => "MP",
            Self::Large => "LP",
        }
    }
}

impl fmt::Display for SpotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SpotSize {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sp" | "small" => Ok(Self::Small),
            "mp" | "medium" => Ok(Self::Medium),
            "lp" | "large" => Ok(Self::Large),
            _ => Err(ParkingError::UnknownSpotSize {
                value: s.to_string(),
            }),
        }
    }
}
