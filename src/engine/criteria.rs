//! Report filters.

use super::offering::Offering;

/// Which plans and datacenters a report covers.
///
/// Empty values mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    category: Option<String>,
    plan_code: Option<String>,
    datacenters: Vec<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only plans whose raw category equals `category`.
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category.filter(|c| !c.is_empty());
        self
    }

    /// Keep only the plan with this exact code.
    pub fn with_plan_code(mut self, plan_code: Option<String>) -> Self {
        self.plan_code = plan_code.filter(|c| !c.is_empty());
        self
    }

    /// Restrict availability to these datacenter codes (case-insensitive).
    pub fn with_datacenters(mut self, datacenters: Vec<String>) -> Self {
        self.datacenters = datacenters
            .into_iter()
            .map(|dc| dc.trim().to_string())
            .filter(|dc| !dc.is_empty())
            .collect();
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn plan_code(&self) -> Option<&str> {
        self.plan_code.as_deref()
    }

    pub fn datacenters(&self) -> &[String] {
        &self.datacenters
    }

    /// Plan-level filters (plan code, then category).
    pub fn accepts<P: Offering + ?Sized>(&self, plan: &P) -> bool {
        if self.plan_code().is_some_and(|code| code != plan.plan_code()) {
            return false;
        }
        if self.category().is_some_and(|category| category != plan.category()) {
            return false;
        }
        true
    }
}
