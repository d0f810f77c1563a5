//! Catalog schema and pricing.
//!
//! This module provides:
//! - The Eco (dedicated) and VPS catalog types
//! - The pricing entry shared by both, with headline price resolution

mod eco;
mod pricing;
mod types;
mod vps;

// Re-export public API
pub use eco::{EcoBlobs, EcoCatalog, EcoPlan};
pub use pricing::{resolve_price, Pricing};
pub use types::{CommercialBlob, Locale};
pub use vps::{
    CpuSpec, DatacenterSpec, DiskSpec, MemorySpec, RaidDetails, StorageSpec, TechnicalBlob,
    VpsBlobs, VpsCatalog, VpsPlan,
};
