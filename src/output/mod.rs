//! Report rendering.
//!
//! This module provides:
//! - Aligned text tables for `list` and `check`
//! - JSON Lines for `list --format jsonl`
//! - A stdout wrapper tolerant of closed pipes

mod jsonl;
mod pipe;
mod table;

// Re-export public API
pub use jsonl::write_jsonl;
pub use pipe::IgnoreBrokenPipe;
pub use table::{check_table, report_table, Table};
