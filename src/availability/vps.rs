//! VPS availability feed, served by `/vps/order/rule/datacenter`.

use serde::Deserialize;

use super::set::{AvailabilitySet, DatacenterAvailability};

/// Response of one VPS availability query (one plan, one subsidiary).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VpsAvailabilities {
    pub datacenters: Vec<VpsDatacenterAvailability>,
}

/// Availability of a VPS plan in one datacenter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VpsDatacenterAvailability {
    pub datacenter: String,
    pub code: String,
    pub status: String,
    pub linux_status: String,
    pub windows_status: String,
}

impl From<VpsDatacenterAvailability> for DatacenterAvailability {
    fn from(dc: VpsDatacenterAvailability) -> Self {
        let mut record = DatacenterAvailability::new(dc.datacenter, dc.status);
        if !dc.linux_status.is_empty() {
            record = record.with_sub_status("linuxStatus", dc.linux_status);
        }
        if !dc.windows_status.is_empty() {
            record = record.with_sub_status("windowsStatus", dc.windows_status);
        }
        record
    }
}

impl From<VpsAvailabilities> for AvailabilitySet {
    fn from(feed: VpsAvailabilities) -> Self {
        feed.datacenters
            .into_iter()
            .map(DatacenterAvailability::from)
            .collect()
    }
}
