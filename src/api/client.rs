//! OVH public API client.

use futures::stream::{self, StreamExt};
use log::{debug, warn};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use url::Url;

use crate::availability::{
    AvailabilityMap, AvailabilitySet, DedicatedAvailability, PlanAvailability, VpsAvailabilities,
};
use crate::catalog::{EcoCatalog, VpsCatalog};
use crate::config::{
    DEDICATED_AVAILABILITY_PATH, ECO_CATALOG_PATH, VPS_AVAILABILITY_PATH, VPS_CATALOG_PATH,
};
use crate::error_handling::{FetchError, FetchStats};

/// Unauthenticated client for the catalog and availability endpoints.
#[derive(Debug, Clone)]
pub struct OvhClient {
    http: reqwest::Client,
    base_url: String,
}

impl OvhClient {
    /// Creates a client for `base_url` (e.g. `https://eu.api.ovh.com/v1`).
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if `base_url` does not parse.
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self, FetchError> {
        let base_url = base_url.trim_end_matches('/');
        Url::parse(base_url)?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, FetchError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!("GET {}", url);
        let url_str = url.to_string();

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url_str.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url_str,
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: url_str.clone(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url_str,
            source,
        })
    }

    /// Dedicated server (Kimsufi, So you Start, Rise) catalog of a subsidiary.
    pub async fn eco_catalog(&self, country: &str) -> Result<EcoCatalog, FetchError> {
        let url = self.endpoint(ECO_CATALOG_PATH, &[("ovhSubsidiary", country)])?;
        self.get_json(url).await
    }

    /// VPS catalog of a subsidiary.
    pub async fn vps_catalog(&self, country: &str) -> Result<VpsCatalog, FetchError> {
        let url = self.endpoint(VPS_CATALOG_PATH, &[("ovhSubsidiary", country)])?;
        self.get_json(url).await
    }

    /// Dedicated server availability, one entry per hardware variant.
    ///
    /// Both filters are optional; the API returns every variant when omitted.
    pub async fn dedicated_availabilities(
        &self,
        plan_code: Option<&str>,
        datacenters: &[String],
    ) -> Result<Vec<DedicatedAvailability>, FetchError> {
        let joined = datacenters.join(",");
        let mut query = Vec::new();
        if let Some(plan_code) = plan_code {
            query.push(("planCode", plan_code));
        }
        if !joined.is_empty() {
            query.push(("datacenters", joined.as_str()));
        }
        let url = self.endpoint(DEDICATED_AVAILABILITY_PATH, &query)?;
        self.get_json(url).await
    }

    /// Availability of one VPS plan in a subsidiary.
    pub async fn vps_availability(
        &self,
        plan_code: &str,
        country: &str,
    ) -> Result<VpsAvailabilities, FetchError> {
        let url = self.endpoint(
            VPS_AVAILABILITY_PATH,
            &[("ovhSubsidiary", country), ("planCode", plan_code)],
        )?;
        self.get_json(url).await
    }

    /// Availability of several VPS plans, at most `concurrency` requests at a time.
    ///
    /// A failed lookup does not fail the batch: the plan maps to
    /// `PlanAvailability::Unknown` with the error as reason.
    pub async fn vps_availabilities(
        &self,
        plan_codes: &[String],
        country: &str,
        concurrency: usize,
    ) -> AvailabilityMap {
        let results: Vec<_> = stream::iter(plan_codes)
            .map(|code| async move { (code, self.vps_availability(code, country).await) })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await;

        let mut stats = FetchStats::new();
        let mut map = AvailabilityMap::with_capacity(results.len());
        for (code, result) in results {
            let availability = match result {
                Ok(feed) => PlanAvailability::Known(AvailabilitySet::from(feed)),
                Err(e) => {
                    stats.increment_error(e.kind());
                    debug!("Availability lookup for {} failed: {}", code, e);
                    PlanAvailability::Unknown(e.to_string())
                }
            };
            map.insert(code.clone(), availability);
        }

        if let Some(summary) = stats.summary() {
            warn!(
                "{} of {} VPS availability lookups failed ({})",
                stats.total_errors(),
                plan_codes.len(),
                summary
            );
        }
        map
    }
}
