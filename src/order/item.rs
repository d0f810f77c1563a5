//! Orderable VPS items and their prices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Amount as displayed by the order API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Price {
    pub currency_code: String,
    pub text: String,
    pub value: f64,
}

/// Time-boxed discount on an item price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Promotion {
    pub description: String,
    pub discount: Price,
    pub end_date: Option<DateTime<Utc>>,
    pub name: String,
    pub start_date: Option<DateTime<Utc>>,
}

impl Promotion {
    /// True if `now` falls inside the promotion window. Open bounds always match.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.start_date.is_none_or(|start| start <= now)
            && self.end_date.is_none_or(|end| now < end)
    }
}

/// Duration and pricing mode identifying one price of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PriceConfig {
    /// ISO 8601 period, e.g. `P1M`
    pub duration: String,
    pub pricing_mode: String,
}

impl PriceConfig {
    pub fn new(duration: impl Into<String>, pricing_mode: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            pricing_mode: pricing_mode.into(),
        }
    }
}

/// One price offered for an item or option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPrice {
    pub capacities: Vec<String>,
    pub description: String,
    pub duration: String,
    pub interval: i64,
    pub maximum_quantity: i64,
    /// `None` when the item can be renewed indefinitely
    pub maximum_repeat: Option<i64>,
    pub minimum_quantity: i64,
    pub minimum_repeat: i64,
    pub price: Price,
    pub price_in_ucents: i64,
    pub pricing_mode: String,
    pub pricing_type: String,
    pub promotions: Vec<Promotion>,
}

impl ItemPrice {
    pub fn matches(&self, config: &PriceConfig) -> bool {
        self.duration == config.duration && self.pricing_mode == config.pricing_mode
    }

    /// The configuration that selects this price.
    pub fn config(&self) -> PriceConfig {
        PriceConfig::new(self.duration.clone(), self.pricing_mode.clone())
    }

    pub fn active_promotions(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Promotion> {
        self.promotions.iter().filter(move |p| p.is_active_at(now))
    }
}

/// A VPS plan as listed by the order cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemInfo {
    pub plan_code: String,
    pub product_name: String,
    pub product_type: String,
    pub prices: Vec<ItemPrice>,
}

impl ItemInfo {
    /// First price offered for `config`.
    pub fn price_by_config(&self, config: &PriceConfig) -> Option<&ItemPrice> {
        self.prices.iter().find(|p| p.matches(config))
    }
}

/// Every VPS item the cart offers, in API order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemInfos(pub Vec<ItemInfo>);

impl ItemInfos {
    pub fn by_plan_code(&self, plan_code: &str) -> Option<&ItemInfo> {
        self.0.iter().find(|i| i.plan_code == plan_code)
    }

    /// `config` if `plan_code` offers it, else the plan's first price config.
    ///
    /// `config` is also returned unchanged when the plan is unknown or has
    /// no prices at all, so the caller's choice is never silently dropped.
    pub fn price_config_or_default(&self, plan_code: &str, config: PriceConfig) -> PriceConfig {
        let Some(item) = self.by_plan_code(plan_code) else {
            return config;
        };
        if item.price_by_config(&config).is_some() {
            return config;
        }
        item.prices.first().map(ItemPrice::config).unwrap_or(config)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemInfo> {
        self.0.iter()
    }
}
