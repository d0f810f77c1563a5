//! Per-plan availability aggregation.

use std::collections::HashMap;

use serde::Serialize;
use strum_macros::{AsRefStr, Display};

use crate::config::STATUS_AVAILABLE;

/// Overall stock verdict of a plan, or of a plan in one datacenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Orderable in at least one datacenter
    Available,
    /// Known, and not orderable anywhere that matters
    OutOfStock,
    /// Availability could not be obtained
    Unknown,
}

/// A named secondary status of a datacenter record (e.g. `linuxStatus`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubStatus {
    pub name: String,
    pub status: String,
}

/// Availability of one plan in one datacenter.
///
/// Status values are passed through from the provider; only `available` has
/// meaning here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatacenterAvailability {
    pub datacenter: String,
    pub status: String,
    pub sub_statuses: Vec<SubStatus>,
}

impl DatacenterAvailability {
    pub fn new(datacenter: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            datacenter: datacenter.into(),
            status: status.into(),
            sub_statuses: Vec::new(),
        }
    }

    /// Adds a named sub-status.
    pub fn with_sub_status(mut self, name: impl Into<String>, status: impl Into<String>) -> Self {
        self.sub_statuses.push(SubStatus {
            name: name.into(),
            status: status.into(),
        });
        self
    }

    /// Value of the sub-status called `name`.
    pub fn sub_status(&self, name: &str) -> Option<&str> {
        self.sub_statuses
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.status.as_str())
    }

    /// True if the primary status or any sub-status is `available`.
    pub fn is_available(&self) -> bool {
        self.status == STATUS_AVAILABLE
            || self.sub_statuses.iter().any(|s| s.status == STATUS_AVAILABLE)
    }

    /// Case-insensitive datacenter code comparison.
    pub fn matches_code(&self, code: &str) -> bool {
        self.datacenter.eq_ignore_ascii_case(code)
    }
}

/// All datacenter records returned for one plan by one availability query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySet {
    records: Vec<DatacenterAvailability>,
}

impl AvailabilitySet {
    pub fn new(records: Vec<DatacenterAvailability>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DatacenterAvailability] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that are available, in original order.
    pub fn available_records(&self) -> impl Iterator<Item = &DatacenterAvailability> {
        self.records.iter().filter(|r| r.is_available())
    }

    /// `Available` if any record is available, else `OutOfStock`.
    ///
    /// An empty set is `OutOfStock`.
    pub fn overall_status(&self) -> StockStatus {
        if self.available_records().next().is_some() {
            StockStatus::Available
        } else {
            StockStatus::OutOfStock
        }
    }

    /// First record whose datacenter code matches `code`, ignoring case.
    pub fn find(&self, code: &str) -> Option<&DatacenterAvailability> {
        self.records.iter().find(|r| r.matches_code(code))
    }

    /// Availability of the first record matching `code`; false when none matches.
    pub fn is_datacenter_available(&self, code: &str) -> bool {
        self.find(code).is_some_and(DatacenterAvailability::is_available)
    }

    /// Codes of available datacenters, in original order.
    pub fn available_codes(&self) -> Vec<String> {
        self.available_records()
            .map(|r| r.datacenter.clone())
            .collect()
    }

    /// Codes of every known datacenter, whatever its status.
    pub fn all_codes(&self) -> Vec<String> {
        self.records.iter().map(|r| r.datacenter.clone()).collect()
    }
}

impl FromIterator<DatacenterAvailability> for AvailabilitySet {
    fn from_iter<I: IntoIterator<Item = DatacenterAvailability>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Outcome of the availability lookup for one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAvailability {
    /// The provider answered
    Known(AvailabilitySet),
    /// The lookup failed; the reason is kept for logging
    Unknown(String),
}

/// Availability outcomes keyed by plan code.
pub type AvailabilityMap = HashMap<String, PlanAvailability>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vps_record(dc: &str, status: &str, linux: &str, windows: &str) -> DatacenterAvailability {
        DatacenterAvailability::new(dc, status)
            .with_sub_status("linuxStatus", linux)
            .with_sub_status("windowsStatus", windows)
    }

    #[test]
    fn test_linux_only_availability_counts() {
        let set = AvailabilitySet::new(vec![vps_record("GRA", "unknown", "available", "unknown")]);
        assert_eq!(set.overall_status(), StockStatus::Available);
        assert!(set.is_datacenter_available("gra"));
        assert!(set.is_datacenter_available("GRA"));
    }

    #[test]
    fn test_all_out_of_stock_but_one_sub_status() {
        let record = vps_record("BHS", "out-of-stock", "out-of-stock", "available");
        assert!(record.is_available());
    }

    #[test]
    fn test_nothing_available() {
        let set = AvailabilitySet::new(vec![
            vps_record("GRA", "out-of-stock", "out-of-stock", "out-of-stock"),
            vps_record("BHS", "out-of-stock", "out-of-stock", "out-of-stock"),
        ]);
        assert_eq!(set.overall_status(), StockStatus::OutOfStock);
        assert!(set.available_codes().is_empty());
        assert_eq!(set.all_codes(), vec!["GRA", "BHS"]);
    }

    #[test]
    fn test_available_codes_keep_order() {
        let set: AvailabilitySet = vec![
            DatacenterAvailability::new("SBG", STATUS_AVAILABLE),
            DatacenterAvailability::new("GRA", "out-of-stock"),
            DatacenterAvailability::new("BHS", STATUS_AVAILABLE),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.available_codes(), vec!["SBG", "BHS"]);
        assert_eq!(set.available_records().count(), 2);
    }

    #[test]
    fn test_empty_set_is_out_of_stock() {
        let set = AvailabilitySet::default();
        assert!(set.is_empty());
        assert_eq!(set.overall_status(), StockStatus::OutOfStock);
        assert!(set.available_codes().is_empty());
        assert!(set.all_codes().is_empty());
        assert!(!set.is_datacenter_available("GRA"));
    }

    #[test]
    fn test_unknown_datacenter_is_not_available() {
        let set = AvailabilitySet::new(vec![DatacenterAvailability::new("GRA", STATUS_AVAILABLE)]);
        assert!(!set.is_datacenter_available("WAW"));
    }

    #[test]
    fn test_first_matching_record_decides() {
        let set = AvailabilitySet::new(vec![
            DatacenterAvailability::new("GRA", "out-of-stock"),
            DatacenterAvailability::new("gra", STATUS_AVAILABLE),
        ]);
        assert!(!set.is_datacenter_available("GRA"));
    }

    #[test]
    fn test_sub_status_lookup() {
        let record = vps_record("GRA", "available", "out-of-stock", "unknown");
        assert_eq!(record.sub_status("linuxStatus"), Some("out-of-stock"));
        assert_eq!(record.sub_status("missing"), None);
    }

    #[test]
    fn test_stock_status_strings() {
        assert_eq!(StockStatus::Available.to_string(), "available");
        assert_eq!(StockStatus::OutOfStock.to_string(), "out-of-stock");
        assert_eq!(StockStatus::Unknown.as_ref(), "unknown");
        assert_eq!(
            serde_json::to_string(&StockStatus::OutOfStock).unwrap(),
            "\"out-of-stock\""
        );
    }

    fn arb_status() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("available".to_string()),
            Just("out-of-stock".to_string()),
            Just("unknown".to_string()),
            "[a-z-]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn test_availability_is_or_of_all_fields(
            status in arb_status(),
            subs in prop::collection::vec(arb_status(), 0..4),
        ) {
            let mut record = DatacenterAvailability::new("GRA", status.clone());
            for (i, sub) in subs.iter().enumerate() {
                record = record.with_sub_status(format!("sub{}", i), sub.clone());
            }
            let expected = status == "available" || subs.iter().any(|s| s == "available");
            prop_assert_eq!(record.is_available(), expected);
        }
    }
}
