//! Options that can be attached to a VPS item.

use serde::{Deserialize, Serialize};

use super::item::{ItemPrice, PriceConfig};

/// One option (backup, extra disk, OS licence, ...) for a VPS item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemOption {
    /// At most one option of the family can be picked
    pub exclusive: bool,
    pub family: String,
    /// The item cannot be ordered without an option of this family
    pub mandatory: bool,
    pub plan_code: String,
    pub prices: Vec<ItemPrice>,
    pub product_name: String,
    pub product_type: String,
}

impl ItemOption {
    /// First price offered for `config`.
    pub fn price_by_config(&self, config: &PriceConfig) -> Option<&ItemPrice> {
        self.prices.iter().find(|p| p.matches(config))
    }
}

/// Every option offered for one item, in API order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemOptions(pub Vec<ItemOption>);

impl ItemOptions {
    /// Mandatory options, in API order.
    pub fn mandatory(&self) -> ItemOptions {
        self.mandatory_where(|_, _| true)
    }

    /// Mandatory options accepted by `keep`.
    ///
    /// `keep` sees the options picked so far, which lets a caller keep a
    /// single option per family.
    pub fn mandatory_where<F>(&self, mut keep: F) -> ItemOptions
    where
        F: FnMut(&[ItemOption], &ItemOption) -> bool,
    {
        let mut picked: Vec<ItemOption> = Vec::new();
        for option in self.0.iter().filter(|o| o.mandatory) {
            if keep(&picked, option) {
                picked.push(option.clone());
            }
        }
        ItemOptions(picked)
    }

    /// First option of `family`.
    pub fn by_family(&self, family: &str) -> Option<&ItemOption> {
        self.0.iter().find(|o| o.family == family)
    }

    /// Distinct families, first-seen order.
    pub fn families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = Vec::new();
        for option in &self.0 {
            if !families.contains(&option.family.as_str()) {
                families.push(&option.family);
            }
        }
        families
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemOption> {
        self.0.iter()
    }
}
