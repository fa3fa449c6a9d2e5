//! # Parking Lot
//!
//! A model of a small parking facility: numbered spots of different size
//! classes, vehicles of different size classes, spot assignment rules and a
//! tiered time-based fee.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the clock capability and the fee rules
//! - **Application Layer** ([`application`]) - The [`ParkingLot`] workflow
//! - **Errors** ([`error`]) - The [`ParkingError`] taxonomy
//! - **Configuration** ([`config`]) - Environment-driven settings for the CLI
//!
//! ## Quick Start
//!
//! ```
//! use parking_lot_sim::prelude::*;
//!
//! let mut lot = ParkingLot::with_layout(
//!     3,
//!     &[SpotSize::Small, SpotSize::Large],
//!     FeeSchedule::default(),
//!     SystemClock,
//! )?;
//!
//! let truck = Vehicle::shared(VehicleSize::Large);
//! let spot = lot.park(&truck)?;
//! assert_eq!(spot.number, 2);
//!
//! let fee = lot.remove(spot)?;
//! assert_eq!(fee, 40);
//! # Ok::<(), ParkingError>(())
//! ```
//!
//! ## Concurrency
//!
//! Everything is single-threaded and synchronous. Vehicles are shared as
//! `Rc<RefCell<_>>`, so neither vehicles nor lots cross thread boundaries.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;

pub use application::services::ParkingLot;
pub use error::ParkingError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ParkingLot, REQUIRED_ENTRY_POINTS};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{
        FeeSchedule, HourlyRates, ParkingSpot, SpotHandle, SpotSize, Vehicle, VehicleRef,
        VehicleSize,
    };
    pub use crate::error::ParkingError;
}
