//! Pricing entries and headline price resolution.

use serde::{Deserialize, Serialize};

use crate::config::{INSTALLATION_CAPACITY, PRICE_DIVIDER};

/// One pricing entry of a catalog plan.
///
/// Eco and VPS catalogs share this shape. Every field defaults when absent so
/// partial entries still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pricing {
    pub capacities: Vec<String>,
    pub commitment: i64,
    pub description: String,
    pub interval: i64,
    pub interval_unit: String,
    pub mode: String,
    pub phase: i64,
    /// Price in currency units scaled by 10^8
    pub price: i64,
    pub tax: i64,
    #[serde(rename = "type")]
    pub pricing_type: String,
}

impl Pricing {
    /// Price as a currency amount (e.g. `500000000` is `5.0`).
    pub fn amount(&self) -> f64 {
        self.price as f64 / PRICE_DIVIDER
    }

    /// True when the only capacity of this entry is `installation`.
    pub fn is_installation_only(&self) -> bool {
        matches!(self.capacities.as_slice(), [only] if only == INSTALLATION_CAPACITY)
    }

    fn is_monthly_rental(&self) -> bool {
        self.interval_unit == "month" && self.interval >= 1 && self.pricing_type == "rental"
    }

    fn is_recurring_candidate(&self) -> bool {
        self.price > 0 && !self.is_installation_only()
    }
}

/// Picks the entry that best represents a plan's headline price.
///
/// Tiers are scanned in input order and the first match wins:
/// 1. a positive monthly rental that is not installation-only,
/// 2. any positive entry that is not installation-only,
/// 3. the first entry.
///
/// An empty list resolves to `Pricing::default()` (price 0).
pub fn resolve_price(pricings: &[Pricing]) -> Pricing {
    pricings
        .iter()
        .find(|p| p.is_monthly_rental() && p.is_recurring_candidate())
        .or_else(|| pricings.iter().find(|p| p.is_recurring_candidate()))
        .or_else(|| pricings.first())
        .cloned()
        .unwrap_or_default()
}
