//! kimsufi_watch library: OVHcloud catalog and stock availability correlation
//!
//! This library fetches the public Eco (Kimsufi, So you Start, Rise) and VPS
//! catalogs, joins each plan with its live per-datacenter availability, resolves
//! a headline monthly price, and reports which plans can be ordered right now.
//!
//! # Example
//!
//! ```no_run
//! use kimsufi_watch::{run_list, Config, ListOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ListOptions {
//!     category: Some("kimsufi".to_string()),
//!     datacenters: vec!["gra".to_string(), "rbx".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_list(&Config::default(), &options, &mut std::io::stdout()).await?;
//! if report.nothing_available {
//!     println!("Nothing to order yet");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The fetch layer requires a Tokio runtime. The correlation engine itself is
//! synchronous and does no I/O.

pub mod api;
pub mod availability;
pub mod catalog;
pub mod category;
pub mod config;
pub mod engine;
pub mod error_handling;
pub mod initialization;
pub mod order;
pub mod output;
mod run;

// Re-export public API
pub use config::{CheckOptions, Config, Endpoint, ListOptions, LogFormat, LogLevel, OutputFormat};
pub use engine::{CheckReport, DisplayRow, FilterCriteria, Report};
pub use run::{exit_code, is_vps_category, is_vps_plan, run_check, run_list};
