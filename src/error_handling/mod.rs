//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Per-run failure statistics (counted by category)
//!
//! Per-token errors (loopback input, resolver failures) are reported and
//! counted but never abort a batch run; input-file and initialization errors
//! are fatal.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_resolve_error, error_kind};
pub use stats::LookupStats;
pub use types::{InitializationError, InputError, LookupError, LookupErrorKind, UsageError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_kind_starts_at_zero_and_counts_up() {
        let mut stats = LookupStats::new();
        for kind in LookupErrorKind::iter() {
            assert_eq!(stats.count(kind), 0);
            stats.record(kind);
            assert_eq!(stats.count(kind), 1);
        }
        assert_eq!(stats.total(), LookupErrorKind::iter().count());
    }

    #[test]
    fn test_error_kind_covers_both_lookup_variants() {
        assert_eq!(
            error_kind(&LookupError::LoopbackInput),
            LookupErrorKind::LoopbackInput
        );

        let timeout = hickory_resolver::error::ResolveError::from(
            hickory_resolver::error::ResolveErrorKind::Timeout,
        );
        assert_eq!(
            error_kind(&LookupError::Resolver(timeout)),
            LookupErrorKind::Timeout
        );
    }
}
