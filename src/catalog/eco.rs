//! Eco (dedicated server) catalog, served by `/order/catalog/public/eco`.

use serde::{Deserialize, Serialize};

use super::pricing::Pricing;
use super::types::{CommercialBlob, Locale};
use crate::config::UNCATEGORIZED;

/// The Eco catalog: Kimsufi, So you Start and Rise dedicated servers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoCatalog {
    #[serde(default)]
    pub catalog_id: i64,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub plans: Vec<EcoPlan>,
}

impl EcoCatalog {
    /// Returns the plan with the given plan code.
    pub fn plan(&self, plan_code: &str) -> Option<&EcoPlan> {
        self.plans.iter().find(|p| p.plan_code == plan_code)
    }
}

/// One orderable dedicated server plan.
///
/// `planCode` is required: a plan without one fails to decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoPlan {
    pub plan_code: String,
    #[serde(default)]
    pub invoice_name: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub pricings: Vec<Pricing>,
    #[serde(default)]
    pub blobs: Option<EcoBlobs>,
}

/// Blobs attached to an Eco plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EcoBlobs {
    pub commercial: Option<CommercialBlob>,
}

impl EcoPlan {
    /// Commercial range of the plan, or `uncategorized`.
    pub fn category(&self) -> &str {
        self.blobs
            .as_ref()
            .and_then(|b| b.commercial.as_ref())
            .and_then(CommercialBlob::range)
            .unwrap_or(UNCATEGORIZED)
    }
}
