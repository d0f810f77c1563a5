//! Error handling and fetch statistics.
//!
//! This module provides:
//! - Error type definitions (`InitializationError`, `FetchError`)
//! - Categorization of fetch failures into `ErrorType`
//! - Fetch failure statistics

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, categorize_reqwest_error, categorize_status};
pub use stats::FetchStats;
pub use types::{ErrorType, FetchError, InitializationError};
