//! `check`: per-datacenter detail for one plan.

use std::io::Write;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::availability::{group_by_plan_code, AvailabilitySet, PlanAvailability};
use crate::config::{CheckOptions, Config, VPS_PLAN_CODE_PREFIX};
use crate::engine::{check_plan, datacenters_label, CheckReport};
use crate::initialization::init_api_client;
use crate::output::check_table;

/// True for plan codes served by the VPS availability feed.
pub fn is_vps_plan(plan_code: &str) -> bool {
    plan_code.starts_with(VPS_PLAN_CODE_PREFIX)
}

/// Fetches the availability of one plan and renders it to `out`.
///
/// # Errors
///
/// Unlike `list`, an availability failure is an error here: there is
/// nothing else to report.
pub async fn run_check<W: Write>(
    config: &Config,
    options: &CheckOptions,
    out: &mut W,
) -> Result<CheckReport> {
    let client = init_api_client(config).context("Failed to initialize API client")?;
    let plan_code = options.plan_code.as_str();

    let set = if is_vps_plan(plan_code) {
        let feed = client
            .vps_availability(plan_code, &config.country)
            .await
            .with_context(|| format!("Failed to fetch availability of {}", plan_code))?;
        AvailabilitySet::from(feed)
    } else {
        let entries = client
            .dedicated_availabilities(Some(plan_code), &[])
            .await
            .with_context(|| format!("Failed to fetch availability of {}", plan_code))?;
        match group_by_plan_code(entries).remove(plan_code) {
            Some(PlanAvailability::Known(set)) => set,
            _ => AvailabilitySet::default(),
        }
    };

    if set.is_empty() {
        info!("No datacenter lists {}", plan_code);
    }

    let report = check_plan(plan_code, &set, &options.datacenters);
    check_table(&report)
        .write_to(out)
        .context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    if report.nothing_available {
        warn!(
            "{} is not available in {}",
            plan_code,
            datacenters_label(&options.datacenters)
        );
    }
    Ok(report)
}
