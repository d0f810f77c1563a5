//! Correlation of catalog plans with live availability.
//!
//! This module provides:
//! - The `Offering` capability shared by every product family
//! - Plan and datacenter filtering
//! - Report building (join, price resolution, verdict) and ordering
//! - Single-plan datacenter checks
//!
//! Everything here is pure: inputs are fully fetched before the engine runs.

mod check;
mod correlate;
mod criteria;
mod offering;
mod sort;

#[cfg(test)]
mod tests;

// Re-export public API
pub use check::{check_plan, datacenters_label, CheckReport};
pub use correlate::{build_report, correlate, datacenter_view, DisplayRow, Report};
pub use criteria::FilterCriteria;
pub use offering::Offering;
pub use sort::{compare_rows, sort_rows};
