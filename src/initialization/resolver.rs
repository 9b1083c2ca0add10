//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::Resolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::error_handling::InitializationError;
use crate::resolver::SystemResolver;

/// Initializes the DNS resolver for forward and reverse lookups.
///
/// Creates a blocking resolver using the default configuration with explicit
/// timeouts, so a slow or unresponsive DNS server fails the lookup instead of
/// hanging the run.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolver` if resolver construction fails.
pub fn init_resolver() -> Result<SystemResolver, InitializationError> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // ndots = 0 prevents search-domain appending on bare hostnames
    opts.ndots = 0;

    let resolver = Resolver::new(ResolverConfig::default(), opts)
        .map_err(|e| InitializationError::DnsResolver(e.to_string()))?;

    Ok(SystemResolver::new(resolver))
}
