//! Catalog/availability correlation.

use log::debug;
use serde::Serialize;

use super::criteria::FilterCriteria;
use super::offering::Offering;
use super::sort::sort_rows;
use crate::availability::{
    AvailabilityMap, AvailabilitySet, DatacenterAvailability, PlanAvailability, StockStatus,
};
use crate::category::display_name_or_raw;
use crate::config::UNKNOWN_DATACENTERS_PLACEHOLDER;

/// One plan, joined with its availability and ready to render.
///
/// Serializes to the JSON Lines row shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub plan_code: String,
    /// Raw category the filters match against
    pub category: String,
    pub category_display: String,
    #[serde(rename = "name")]
    pub invoice_name: String,
    /// Headline price in currency units
    pub price: f64,
    pub currency: String,
    pub status: StockStatus,
    /// Datacenter codes (or a location hint when availability is unknown)
    pub datacenters: Vec<String>,
}

/// Rows of a report plus its overall verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<DisplayRow>,
    /// True unless at least one row is `available`
    pub nothing_available: bool,
}

impl Report {
    /// Number of rows whose status is `available`.
    pub fn available_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.status == StockStatus::Available)
            .count()
    }
}

/// Joins plans with their availability, in catalog order.
///
/// Plans rejected by `criteria` are skipped. A plan missing from
/// `availability` is reported as `unknown`, like a failed lookup.
pub fn correlate<P: Offering>(
    plans: &[P],
    availability: &AvailabilityMap,
    criteria: &FilterCriteria,
    currency: &str,
) -> Report {
    let mut rows = Vec::new();
    let mut nothing_available = true;

    for plan in plans.iter().filter(|p| criteria.accepts(*p)) {
        let (status, datacenters) = match availability.get(plan.plan_code()) {
            Some(PlanAvailability::Known(set)) => datacenter_view(set, criteria.datacenters()),
            Some(PlanAvailability::Unknown(reason)) => {
                debug!("Availability of {} is unknown: {}", plan.plan_code(), reason);
                unknown_view(plan)
            }
            None => {
                debug!("No availability data for {}", plan.plan_code());
                unknown_view(plan)
            }
        };

        if status == StockStatus::Available {
            nothing_available = false;
        }

        let category = plan.category();
        rows.push(DisplayRow {
            plan_code: plan.plan_code().to_string(),
            category: category.to_string(),
            category_display: display_name_or_raw(category).to_string(),
            invoice_name: plan.invoice_name().to_string(),
            price: plan.resolve_price().amount(),
            currency: currency.to_string(),
            status,
            datacenters,
        });
    }

    Report {
        rows,
        nothing_available,
    }
}

/// Correlates, then orders rows by category display name and price.
pub fn build_report<P: Offering>(
    plans: &[P],
    availability: &AvailabilityMap,
    criteria: &FilterCriteria,
    currency: &str,
) -> Report {
    let mut report = correlate(plans, availability, criteria, currency);
    sort_rows(&mut report.rows);
    report
}

/// Status and datacenters shown for a plan with known availability.
///
/// Without a datacenter filter: the available datacenters, or every known one
/// when none is available. With a filter: the requested datacenters that are
/// available; when there are none the status is forced to `out-of-stock` and
/// the requested datacenters that exist are shown instead, or every known one
/// when none of them exists. Stored codes keep their case, and a datacenter
/// requested twice is shown once.
pub fn datacenter_view(set: &AvailabilitySet, requested: &[String]) -> (StockStatus, Vec<String>) {
    let status = set.overall_status();

    if requested.is_empty() {
        let available = set.available_codes();
        let shown = if available.is_empty() {
            set.all_codes()
        } else {
            available
        };
        return (status, shown);
    }

    let mut matched: Vec<&DatacenterAvailability> = Vec::new();
    for record in requested.iter().filter_map(|code| set.find(code)) {
        if !matched.iter().any(|seen| std::ptr::eq(*seen, record)) {
            matched.push(record);
        }
    }
    let available: Vec<String> = matched
        .iter()
        .filter(|r| r.is_available())
        .map(|r| r.datacenter.clone())
        .collect();
    if !available.is_empty() {
        return (status, available);
    }

    let shown = if matched.is_empty() {
        set.all_codes()
    } else {
        matched.iter().map(|r| r.datacenter.clone()).collect()
    };
    (StockStatus::OutOfStock, shown)
}

fn unknown_view<P: Offering + ?Sized>(plan: &P) -> (StockStatus, Vec<String>) {
    let hint = plan
        .datacenter_hint()
        .unwrap_or(UNKNOWN_DATACENTERS_PLACEHOLDER);
    (StockStatus::Unknown, vec![hint.to_string()])
}
