//! Error categorization.
//!
//! This module maps lookup failures onto [`LookupErrorKind`] categories for
//! statistics counting.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};

use super::types::{LookupError, LookupErrorKind};

/// Categorizes a resolver error into a [`LookupErrorKind`].
///
/// This is the unified categorization logic used when tallying per-token
/// failures, so the end-of-run breakdown is consistent with what was printed.
pub fn categorize_resolve_error(error: &ResolveError) -> LookupErrorKind {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => LookupErrorKind::NoRecordsFound,
        ResolveErrorKind::Timeout => LookupErrorKind::Timeout,
        ResolveErrorKind::Io(_) => LookupErrorKind::Network,
        _ => LookupErrorKind::OtherResolver,
    }
}

/// Returns the statistics category for a per-token lookup failure.
pub fn error_kind(error: &LookupError) -> LookupErrorKind {
    match error {
        LookupError::LoopbackInput => LookupErrorKind::LoopbackInput,
        LookupError::Resolver(e) => categorize_resolve_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loopback_maps_to_loopback_kind() {
        assert_eq!(
            error_kind(&LookupError::LoopbackInput),
            LookupErrorKind::LoopbackInput
        );
    }

    #[test]
    fn test_timeout_maps_to_timeout_kind() {
        let resolve_error = ResolveError::from(ResolveErrorKind::Timeout);
        assert_eq!(
            categorize_resolve_error(&resolve_error),
            LookupErrorKind::Timeout
        );
        assert_eq!(
            error_kind(&LookupError::Resolver(resolve_error)),
            LookupErrorKind::Timeout
        );
    }

    #[test]
    fn test_io_maps_to_network_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let resolve_error = ResolveError::from(ResolveErrorKind::Io(io));
        assert_eq!(
            categorize_resolve_error(&resolve_error),
            LookupErrorKind::Network
        );
    }

    #[test]
    fn test_message_maps_to_other_kind() {
        let resolve_error = ResolveError::from("some opaque failure");
        assert_eq!(
            categorize_resolve_error(&resolve_error),
            LookupErrorKind::OtherResolver
        );
    }
}
