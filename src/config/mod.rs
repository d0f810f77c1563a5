//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (API paths, timeouts, fallbacks)
//! - CLI option types and parsing
//! - Library configuration structs usable without the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    CheckArgs, CheckOptions, Command, Config, Endpoint, ListArgs, ListOptions, LogFormat,
    LogLevel, Opt, OutputFormat,
};
