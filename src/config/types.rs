//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Args, Parser, Subcommand, ValueEnum};
use strum_macros::{Display, EnumIter};

use crate::config::constants::{
    DEFAULT_COUNTRY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, OVH_CA_BASE_URL, OVH_EU_BASE_URL,
    OVH_US_BASE_URL,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// OVHcloud API endpoint the catalog and availability are read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Endpoint {
    /// Europe (`eu.api.ovh.com`)
    OvhEu,
    /// Canada (`ca.api.ovh.com`)
    OvhCa,
    /// United States (`api.us.ovhcloud.com`)
    OvhUs,
}

impl Endpoint {
    /// Returns the versioned API base URL for this endpoint.
    pub fn base_url(&self) -> &'static str {
        match self {
            Endpoint::OvhEu => OVH_EU_BASE_URL,
            Endpoint::OvhCa => OVH_CA_BASE_URL,
            Endpoint::OvhUs => OVH_US_BASE_URL,
        }
    }
}

/// Report output format for `list`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table with a header row
    Table,
    /// One JSON object per row
    Jsonl,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Every Kimsufi server, with datacenter full names
/// kimsufi_watch list --category kimsufi --human
///
/// # VPS plans sold to Canadian customers
/// kimsufi_watch --country CA list --category vps
///
/// # Poll a single plan in two datacenters (exit code 1 while out of stock)
/// kimsufi_watch check --plan-code 24ska01 --datacenters gra,rbx
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "kimsufi_watch",
    version,
    about = "Lists OVHcloud Eco and VPS plans with their live datacenter availability."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// OVH API endpoint: ovh-eu|ovh-ca|ovh-us
    #[arg(
        long,
        value_enum,
        env = "OVH_ENDPOINT",
        default_value_t = Endpoint::OvhEu,
        global = true
    )]
    pub endpoint: Endpoint,

    /// Explicit API base URL, overriding `--endpoint`
    #[arg(long, env = "OVH_API_URL", global = true)]
    pub api_url: Option<String>,

    /// OVH subsidiary (country code) used for catalog prices and VPS stock
    #[arg(long, env = "KIMSUFI_COUNTRY", default_value = DEFAULT_COUNTRY, global = true)]
    pub country: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List plans with price and availability
    List(ListArgs),
    /// Show per-datacenter availability of a single plan
    Check(CheckArgs),
}

/// Arguments of the `list` subcommand.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Category to filter on (e.g. kimsufi, soyoustart, rise). `vps` lists the VPS catalog
    #[arg(short, long)]
    pub category: Option<String>,

    /// Plan code to filter on (e.g. 24ska01)
    #[arg(short, long)]
    pub plan_code: Option<String>,

    /// Comma-separated datacenter codes to restrict availability to (e.g. gra,rbx)
    #[arg(short, long, value_delimiter = ',')]
    pub datacenters: Vec<String>,

    /// Show datacenter full names instead of codes
    #[arg(long)]
    pub human: bool,

    /// Output format: table|jsonl
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments of the `check` subcommand.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Plan code to check (e.g. 24ska01, vps-2025-model1)
    #[arg(short, long)]
    pub plan_code: String,

    /// Comma-separated datacenter codes to restrict the check to
    #[arg(short, long, value_delimiter = ',')]
    pub datacenters: Vec<String>,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use kimsufi_watch::{Config, Endpoint};
///
/// let config = Config {
///     endpoint: Endpoint::OvhCa,
///     country: "CA".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.api_base_url(), "https://ca.api.ovh.com/v1");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// API endpoint
    pub endpoint: Endpoint,

    /// Base URL override (takes precedence over `endpoint`)
    pub api_url: Option<String>,

    /// OVH subsidiary
    pub country: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Config {
    /// Base URL all API paths are appended to.
    pub fn api_base_url(&self) -> &str {
        self.api_url
            .as_deref()
            .unwrap_or_else(|| self.endpoint.base_url())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            endpoint: Endpoint::OvhEu,
            api_url: None,
            country: DEFAULT_COUNTRY.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            endpoint: opt.endpoint,
            api_url: opt.api_url.clone(),
            country: opt.country.clone(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Options of a `list` run.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Category filter (`vps` selects the VPS catalog)
    pub category: Option<String>,
    /// Plan code filter
    pub plan_code: Option<String>,
    /// Datacenter filter, matched case-insensitively
    pub datacenters: Vec<String>,
    /// Render datacenter full names
    pub human: bool,
    /// Output format
    pub format: OutputFormat,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            category: None,
            plan_code: None,
            datacenters: Vec::new(),
            human: false,
            format: OutputFormat::Table,
        }
    }
}

impl From<ListArgs> for ListOptions {
    fn from(args: ListArgs) -> Self {
        Self {
            category: args.category,
            plan_code: args.plan_code,
            datacenters: args.datacenters,
            human: args.human,
            format: args.format,
        }
    }
}

/// Options of a `check` run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Plan code to check
    pub plan_code: String,
    /// Datacenter filter, matched case-insensitively
    pub datacenters: Vec<String>,
}

impl From<CheckArgs> for CheckOptions {
    fn from(args: CheckArgs) -> Self {
        Self {
            plan_code: args.plan_code,
            datacenters: args.datacenters,
        }
    }
}
