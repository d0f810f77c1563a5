//! The per-product-family capability the report engine works over.

use crate::catalog::{resolve_price, EcoPlan, Pricing, VpsPlan};

/// What the report needs from an orderable plan, whatever its product family.
pub trait Offering {
    /// Provider plan code
    fn plan_code(&self) -> &str;

    /// Raw (not display) category
    fn category(&self) -> &str;

    /// Name printed on invoices
    fn invoice_name(&self) -> &str;

    /// Pricing entries in catalog order
    fn pricings(&self) -> &[Pricing];

    /// Headline price entry.
    fn resolve_price(&self) -> Pricing {
        resolve_price(self.pricings())
    }

    /// Static location shown when live availability is unknown.
    fn datacenter_hint(&self) -> Option<&str> {
        None
    }
}

impl Offering for EcoPlan {
    fn plan_code(&self) -> &str {
        &self.plan_code
    }

    fn category(&self) -> &str {
        EcoPlan::category(self)
    }

    fn invoice_name(&self) -> &str {
        &self.invoice_name
    }

    fn pricings(&self) -> &[Pricing] {
        &self.pricings
    }
}

impl Offering for VpsPlan {
    fn plan_code(&self) -> &str {
        &self.plan_code
    }

    fn category(&self) -> &str {
        VpsPlan::category(self)
    }

    fn invoice_name(&self) -> &str {
        &self.invoice_name
    }

    fn pricings(&self) -> &[Pricing] {
        &self.pricings
    }

    fn datacenter_hint(&self) -> Option<&str> {
        VpsPlan::datacenter_hint(self)
    }
}
