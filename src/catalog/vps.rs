//! VPS catalog, served by `/order/catalog/public/vps`.

use serde::{Deserialize, Serialize};

use super::pricing::Pricing;
use super::types::{CommercialBlob, Locale};
use crate::config::VPS_CATEGORY;

/// The VPS catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpsCatalog {
    #[serde(default)]
    pub catalog_id: i64,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub plans: Vec<VpsPlan>,
}

impl VpsCatalog {
    /// Returns the plan with the given plan code.
    pub fn plan(&self, plan_code: &str) -> Option<&VpsPlan> {
        self.plans.iter().find(|p| p.plan_code == plan_code)
    }
}

/// One orderable VPS plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpsPlan {
    pub plan_code: String,
    #[serde(default)]
    pub invoice_name: String,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub pricings: Vec<Pricing>,
    #[serde(default)]
    pub blobs: Option<VpsBlobs>,
}

/// Blobs attached to a VPS plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VpsBlobs {
    pub commercial: Option<CommercialBlob>,
    pub technical: Option<TechnicalBlob>,
}

/// Technical specification blob.
///
/// Only the location and the cpu/memory/storage sizing are read; the
/// provider publishes many more sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalBlob {
    pub datacenter: Option<DatacenterSpec>,
    pub cpu: Option<CpuSpec>,
    pub memory: Option<MemorySpec>,
    pub storage: Option<StorageSpec>,
}

/// Static location of a VPS plan, as published in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatacenterSpec {
    pub city: String,
    pub country: String,
    pub country_code: String,
    pub name: String,
    pub region: String,
}

/// vCPU sizing. `frequency` and `max_frequency` are in GHz.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CpuSpec {
    pub boost: i64,
    pub brand: String,
    pub cores: u32,
    pub customizable: bool,
    pub frequency: f64,
    pub max_frequency: f64,
    pub model: String,
    pub number: u32,
    pub score: i64,
    pub threads: u32,
    #[serde(rename = "type")]
    pub cpu_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemorySpec {
    pub customizable: bool,
    pub ecc: bool,
    pub frequency: i64,
    pub interface: String,
    pub ram_type: String,
    pub size: i64,
    pub size_unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageSpec {
    pub disks: Vec<DiskSpec>,
    pub hot_swap: bool,
    pub raid: String,
    pub raid_details: Option<RaidDetails>,
}

impl StorageSpec {
    /// Sum of `capacity * number` over every disk, in the disks' own unit.
    /// A disk without a count is counted once.
    pub fn total_capacity(&self) -> i64 {
        self.disks
            .iter()
            .map(|d| d.capacity * i64::from(d.number.max(1)))
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiskSpec {
    pub capacity: i64,
    pub interface: String,
    pub iops: i64,
    pub maximum_capacity: i64,
    pub number: u32,
    pub size_unit: String,
    pub specs: String,
    pub technology: String,
    pub usage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaidDetails {
    pub card_model: String,
    pub card_size: String,
    #[serde(rename = "type")]
    pub raid_type: String,
}

impl VpsPlan {
    /// Category of the plan.
    ///
    /// Family first, then commercial range, then `vps`.
    pub fn category(&self) -> &str {
        if let Some(family) = self.family.as_deref().filter(|f| !f.is_empty()) {
            return family;
        }
        self.blobs
            .as_ref()
            .and_then(|b| b.commercial.as_ref())
            .and_then(CommercialBlob::range)
            .unwrap_or(VPS_CATEGORY)
    }

    fn technical(&self) -> Option<&TechnicalBlob> {
        self.blobs.as_ref().and_then(|b| b.technical.as_ref())
    }

    /// Datacenter information from the technical specs, if any.
    pub fn datacenter_info(&self) -> Option<&DatacenterSpec> {
        self.technical().and_then(|t| t.datacenter.as_ref())
    }

    pub fn cpu_info(&self) -> Option<&CpuSpec> {
        self.technical().and_then(|t| t.cpu.as_ref())
    }

    pub fn memory_info(&self) -> Option<&MemorySpec> {
        self.technical().and_then(|t| t.memory.as_ref())
    }

    pub fn storage_info(&self) -> Option<&StorageSpec> {
        self.technical().and_then(|t| t.storage.as_ref())
    }

    /// Location hint from the technical specs: datacenter name, else country code.
    pub fn datacenter_hint(&self) -> Option<&str> {
        let dc = self.datacenter_info()?;
        [dc.name.as_str(), dc.country_code.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
    }
}
