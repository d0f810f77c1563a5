//! `list`: every plan of a catalog with its price and availability.

use std::io::Write;

use anyhow::{Context, Result};
use log::info;

use crate::api::OvhClient;
use crate::availability::group_by_plan_code;
use crate::config::{Config, ListOptions, OutputFormat, VPS_AVAILABILITY_CONCURRENCY, VPS_CATEGORY};
use crate::engine::{build_report, FilterCriteria, Report};
use crate::initialization::init_api_client;
use crate::output::{report_table, write_jsonl};

/// True when the category selects the VPS catalog.
pub fn is_vps_category(category: Option<&str>) -> bool {
    category.is_some_and(|c| c.eq_ignore_ascii_case(VPS_CATEGORY))
}

/// Fetches, correlates and renders a report to `out`.
///
/// `--category vps` reads the VPS catalog and queries availability plan by
/// plan; anything else reads the Eco catalog and its single availability feed.
///
/// # Errors
///
/// Fails if the client cannot be built, a catalog or the dedicated server
/// availability feed cannot be fetched, or the report cannot be written.
/// Per-plan VPS availability failures are not errors: those plans are
/// reported as `unknown`.
pub async fn run_list<W: Write>(config: &Config, options: &ListOptions, out: &mut W) -> Result<Report> {
    let client = init_api_client(config).context("Failed to initialize API client")?;

    let criteria = FilterCriteria::new()
        .with_plan_code(options.plan_code.clone())
        .with_datacenters(options.datacenters.clone());

    let report = if is_vps_category(options.category.as_deref()) {
        list_vps(&client, config, &criteria).await?
    } else {
        let criteria = criteria.with_category(options.category.clone());
        list_eco(&client, config, &criteria).await?
    };

    match options.format {
        OutputFormat::Table => report_table(&report, options.human)
            .write_to(out)
            .context("Failed to write report")?,
        OutputFormat::Jsonl => {
            write_jsonl(&report, options.human, out)?;
        }
    }
    out.flush().context("Failed to flush report")?;

    info!(
        "{} of {} listed plans available",
        report.available_count(),
        report.rows.len()
    );
    Ok(report)
}

async fn list_eco(client: &OvhClient, config: &Config, criteria: &FilterCriteria) -> Result<Report> {
    let catalog = client
        .eco_catalog(&config.country)
        .await
        .context("Failed to fetch Eco catalog")?;
    info!(
        "Loaded {} Eco plans for subsidiary {}",
        catalog.plans.len(),
        config.country
    );

    // One feed covers every plan, so its failure aborts the report
    let entries = client
        .dedicated_availabilities(criteria.plan_code(), criteria.datacenters())
        .await
        .context("Failed to fetch dedicated server availability")?;
    let availability = group_by_plan_code(entries);

    Ok(build_report(
        &catalog.plans,
        &availability,
        criteria,
        &catalog.locale.currency_code,
    ))
}

async fn list_vps(client: &OvhClient, config: &Config, criteria: &FilterCriteria) -> Result<Report> {
    let catalog = client
        .vps_catalog(&config.country)
        .await
        .context("Failed to fetch VPS catalog")?;
    info!(
        "Loaded {} VPS plans for subsidiary {}",
        catalog.plans.len(),
        config.country
    );

    // Only query plans that survive the filters
    let plan_codes: Vec<String> = catalog
        .plans
        .iter()
        .filter(|p| criteria.accepts(*p))
        .map(|p| p.plan_code.clone())
        .collect();
    let availability = client
        .vps_availabilities(&plan_codes, &config.country, VPS_AVAILABILITY_CONCURRENCY)
        .await;

    Ok(build_report(
        &catalog.plans,
        &availability,
        criteria,
        &catalog.locale.currency_code,
    ))
}
