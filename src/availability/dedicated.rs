//! Dedicated server availability feed, served by
//! `/dedicated/server/datacenter/availabilities`.
//!
//! The feed lists one entry per hardware variant (`fqn`), several of which can
//! share a plan code. Variants are folded into one `AvailabilitySet` per plan
//! code: one record per datacenter, one sub-status per variant.

use std::collections::HashMap;

use log::trace;
use serde::Deserialize;

use super::set::{
    AvailabilityMap, AvailabilitySet, DatacenterAvailability, PlanAvailability, SubStatus,
};
use crate::config::{STATUS_AVAILABLE, STATUS_OUT_OF_STOCK};

/// One hardware variant of a plan and its per-datacenter availability.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DedicatedAvailability {
    pub fqn: String,
    pub plan_code: String,
    pub memory: String,
    pub storage: String,
    pub server: String,
    pub datacenters: Vec<DedicatedDatacenter>,
}

/// Raw availability of a variant in one datacenter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DedicatedDatacenter {
    pub datacenter: String,
    /// Delivery delay (`1H-low`, `72H`, ...) or `unavailable` / `comingSoon`
    pub availability: String,
}

/// Maps a raw dedicated availability value onto the shared status vocabulary.
pub fn normalize_availability(raw: &str) -> &'static str {
    match raw {
        "unavailable" | "comingSoon" => STATUS_OUT_OF_STOCK,
        _ => STATUS_AVAILABLE,
    }
}

/// Groups variant entries by plan code.
///
/// Datacenters keep first-seen order; the first variant seen in a datacenter
/// provides the primary status.
pub fn group_by_plan_code(entries: Vec<DedicatedAvailability>) -> AvailabilityMap {
    let mut grouped: HashMap<String, Vec<DatacenterAvailability>> = HashMap::new();

    for entry in entries {
        let variant = if entry.fqn.is_empty() {
            entry.server
        } else {
            entry.fqn
        };
        let records = grouped.entry(entry.plan_code).or_default();
        for dc in entry.datacenters {
            let status = normalize_availability(&dc.availability);
            let position = match records.iter().position(|r| r.datacenter == dc.datacenter) {
                Some(position) => position,
                None => {
                    records.push(DatacenterAvailability::new(dc.datacenter, status));
                    records.len() - 1
                }
            };
            records[position].sub_statuses.push(SubStatus {
                name: variant.clone(),
                status: status.to_string(),
            });
        }
    }

    trace!("Grouped dedicated availability for {} plan codes", grouped.len());
    grouped
        .into_iter()
        .map(|(plan_code, records)| {
            (
                plan_code,
                PlanAvailability::Known(AvailabilitySet::new(records)),
            )
        })
        .collect()
}
