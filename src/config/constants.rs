//! Configuration constants.
//!
//! This module defines the constants used throughout the application: API
//! paths, timeouts, fallback literals and fixed-point scaling.

// Network operation timeouts
/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for API requests.
pub const DEFAULT_USER_AGENT: &str = concat!("kimsufi_watch/", env!("CARGO_PKG_VERSION"));

/// OVH subsidiary used when no `--country` is given.
pub const DEFAULT_COUNTRY: &str = "FR";

/// Maximum number of VPS availability requests in flight at once.
///
/// The VPS availability endpoint answers for one plan at a time, so listing
/// the VPS catalog costs one request per plan.
pub const VPS_AVAILABILITY_CONCURRENCY: usize = 8;

// API paths (relative to the endpoint base URL)
pub const ECO_CATALOG_PATH: &str = "/order/catalog/public/eco";
pub const VPS_CATALOG_PATH: &str = "/order/catalog/public/vps";
pub const DEDICATED_AVAILABILITY_PATH: &str = "/dedicated/server/datacenter/availabilities";
pub const VPS_AVAILABILITY_PATH: &str = "/vps/order/rule/datacenter";

// Base URLs per endpoint
pub const OVH_EU_BASE_URL: &str = "https://eu.api.ovh.com/v1";
pub const OVH_CA_BASE_URL: &str = "https://ca.api.ovh.com/v1";
pub const OVH_US_BASE_URL: &str = "https://api.us.ovhcloud.com/v1";

/// Catalog prices are integers scaled by 10^8.
pub const PRICE_DIVIDER: f64 = 100_000_000.0;

// Raw status vocabulary shared by both availability feeds
pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_OUT_OF_STOCK: &str = "out-of-stock";

/// Capacity tag marking a one-time setup fee.
pub const INSTALLATION_CAPACITY: &str = "installation";

/// Case-sensitive prefix routing `check` to the VPS availability feed.
pub const VPS_PLAN_CODE_PREFIX: &str = "vps";

// Category fallbacks
/// Category of a VPS plan with neither family nor commercial range
pub const VPS_CATEGORY: &str = "vps";
/// Category of an Eco plan with no commercial range
pub const UNCATEGORIZED: &str = "uncategorized";

/// Datacenter placeholder shown when live availability could not be obtained
/// and the catalog has no location hint either.
pub const UNKNOWN_DATACENTERS_PLACEHOLDER: &str = "various";

// Process exit codes
/// At least one listed plan is orderable
pub const EXIT_AVAILABLE: i32 = 0;
/// Nothing listed is currently orderable
pub const EXIT_NOTHING_AVAILABLE: i32 = 1;
/// The report could not be produced
pub const EXIT_ERROR: i32 = 2;
