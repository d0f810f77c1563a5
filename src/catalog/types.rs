//! Schema pieces shared by the Eco and VPS catalogs.

use serde::{Deserialize, Serialize};

/// Catalog locale (currency and subsidiary the prices apply to).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Locale {
    pub currency_code: String,
    pub subsidiary: String,
    pub tax_mode: String,
}

/// Commercial metadata blob.
///
/// `range` is the commercial line a plan is sold under (`kimsufi`, `rise`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommercialBlob {
    pub brick: Option<String>,
    pub line: Option<String>,
    pub name: Option<String>,
    pub range: Option<String>,
}

impl CommercialBlob {
    /// The commercial range, if present and non-empty.
    pub fn range(&self) -> Option<&str> {
        self.range.as_deref().filter(|r| !r.is_empty())
    }
}
