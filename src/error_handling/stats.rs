//! Lookup failure statistics.
//!
//! Tallies per-token failures by category so a breakdown can be logged at the
//! end of a run. The run model is single-threaded and sequential, so plain
//! counters are sufficient.

use std::collections::HashMap;

use log::info;
use strum::IntoEnumIterator;

use super::types::LookupErrorKind;

/// Per-category failure counters for one run.
///
/// All categories are initialized to zero on creation.
#[derive(Debug)]
pub struct LookupStats {
    counts: HashMap<LookupErrorKind, usize>,
}

impl LookupStats {
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in LookupErrorKind::iter() {
            counts.insert(kind, 0);
        }
        LookupStats { counts }
    }

    /// Increment the counter for a failure category.
    pub fn record(&mut self, kind: LookupErrorKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Get the count for a failure category.
    pub fn count(&self, kind: LookupErrorKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Get total failure count across all categories.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Logs a per-category breakdown of failures, skipping empty categories.
    ///
    /// Logs nothing at all when the run had no failures.
    pub fn log_summary(&self) {
        if self.total() == 0 {
            return;
        }
        info!("Lookup failures by category:");
        for kind in LookupErrorKind::iter() {
            let count = self.count(kind);
            if count > 0 {
                info!("  {}: {}", kind, count);
            }
        }
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}
