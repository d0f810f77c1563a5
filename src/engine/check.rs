//! Per-datacenter detail for a single plan.

use crate::availability::{AvailabilitySet, DatacenterAvailability};

/// Datacenter records of one plan, narrowed to the requested datacenters.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub plan_code: String,
    pub records: Vec<DatacenterAvailability>,
    /// True unless a shown record is available
    pub nothing_available: bool,
}

impl CheckReport {
    /// Names of every sub-status carried by the shown records, first-seen order.
    pub fn sub_status_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for sub in self.records.iter().flat_map(|r| &r.sub_statuses) {
            if !names.contains(&sub.name) {
                names.push(sub.name.clone());
            }
        }
        names
    }
}

/// Narrows `set` to `datacenters` (case-insensitive, all when empty).
pub fn check_plan(plan_code: &str, set: &AvailabilitySet, datacenters: &[String]) -> CheckReport {
    let records: Vec<DatacenterAvailability> = set
        .records()
        .iter()
        .filter(|r| datacenters.is_empty() || datacenters.iter().any(|dc| r.matches_code(dc)))
        .cloned()
        .collect();
    let nothing_available = !records.iter().any(DatacenterAvailability::is_available);

    CheckReport {
        plan_code: plan_code.to_string(),
        records,
        nothing_available,
    }
}

/// `"gra, rbx"`, or `"any datacenter"` when no filter was given.
pub fn datacenters_label(datacenters: &[String]) -> String {
    if datacenters.is_empty() {
        "any datacenter".to_string()
    } else {
        datacenters.join(", ")
    }
}
