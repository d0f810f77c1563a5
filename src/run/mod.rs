//! Command runners.
//!
//! Each runner fetches its inputs, runs the engine, renders the result to the
//! given writer and returns the report so the caller can pick an exit code.

mod check;
mod list;

use crate::config::{EXIT_AVAILABLE, EXIT_NOTHING_AVAILABLE};

// Re-export public API
pub use check::{is_vps_plan, run_check};
pub use list::{is_vps_category, run_list};

/// Process exit code for a report verdict.
///
/// Global errors map to `EXIT_ERROR` in the binary.
pub fn exit_code(nothing_available: bool) -> i32 {
    if nothing_available {
        EXIT_NOTHING_AVAILABLE
    } else {
        EXIT_AVAILABLE
    }
}
