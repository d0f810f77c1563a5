//! Live stock availability.
//!
//! This module provides:
//! - The shared per-datacenter availability model and its per-plan aggregate
//! - The VPS and dedicated server feed schemas, converted into that model
//! - Datacenter code to location name lookup

pub mod datacenter;
mod dedicated;
mod set;
mod vps;

// Re-export public API
pub use dedicated::{
    group_by_plan_code, normalize_availability, DedicatedAvailability, DedicatedDatacenter,
};
pub use set::{
    AvailabilityMap, AvailabilitySet, DatacenterAvailability, PlanAvailability, StockStatus,
    SubStatus,
};
pub use vps::{VpsAvailabilities, VpsDatacenterAvailability};
