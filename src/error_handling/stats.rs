//! Fetch failure statistics.
//!
//! Per-plan availability lookups are allowed to fail; this tracker counts the
//! failures by category so a run can report them in one summary line.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Fetch failure counts by category.
///
/// Filled after the concurrent lookups have been collected, so it is owned
/// and updated by a single task.
#[derive(Debug, Default)]
pub struct FetchStats {
    errors: HashMap<ErrorType, usize>,
}

impl FetchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment an error counter.
    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    /// Get the count for an error type; zero if it never occurred.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    /// Total number of failures recorded.
    pub fn total_errors(&self) -> usize {
        self.errors.values().sum()
    }

    /// One-line description of non-zero counters, in `ErrorType` declaration order.
    ///
    /// Returns `None` when nothing failed.
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<String> = ErrorType::iter()
            .filter_map(|error| {
                let count = self.get_error_count(error);
                (count > 0).then(|| format!("{}: {}", error, count))
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = FetchStats::new();
        for error in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error), 0);
        }
        assert_eq!(stats.total_errors(), 0);
        assert!(stats.summary().is_none());
    }

    #[test]
    fn test_increment_and_summary() {
        let mut stats = FetchStats::new();
        stats.increment_error(ErrorType::HttpRequestGatewayTimeout);
        stats.increment_error(ErrorType::HttpRequestGatewayTimeout);
        stats.increment_error(ErrorType::HttpRequestNotFound);

        assert_eq!(stats.total_errors(), 3);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestGatewayTimeout), 2);
        assert_eq!(
            stats.summary().as_deref(),
            Some("Not Found (404): 1, Gateway Timeout (504): 2")
        );
    }

    #[test]
    fn test_only_seen_categories_are_stored() {
        let mut stats = FetchStats::default();
        stats.increment_error(ErrorType::HttpRequestNotFound);

        assert_eq!(stats.errors.len(), 1);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestGatewayTimeout), 0);
        assert_eq!(stats.summary().as_deref(), Some("Not Found (404): 1"));
    }
}
