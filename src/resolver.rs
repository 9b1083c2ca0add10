//! Host resolver collaborator.
//!
//! The strategy logic only needs two operations: forward (hostname to
//! addresses) and reverse (address to hostnames). They live behind a trait so
//! tests can drive the decision tree with a scripted resolver and no network.

use std::net::IpAddr;

use hickory_resolver::error::ResolveError;
use hickory_resolver::Resolver;

/// Forward and reverse DNS lookups.
///
/// Result ordering is whatever the underlying resolver returns; nothing here
/// sorts or deduplicates.
pub trait HostResolver {
    /// Forward lookup: hostname to one or more IP addresses.
    fn forward(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;

    /// Reverse lookup: IP address to one or more hostnames (PTR records).
    fn reverse(&self, ip: IpAddr) -> Result<Vec<String>, ResolveError>;
}

/// [`HostResolver`] backed by the blocking hickory resolver.
pub struct SystemResolver {
    inner: Resolver,
}

impl SystemResolver {
    /// Wraps an already-configured blocking resolver.
    pub fn new(inner: Resolver) -> Self {
        SystemResolver { inner }
    }
}

impl HostResolver for SystemResolver {
    fn forward(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        let response = self.inner.lookup_ip(host)?;
        Ok(response.iter().collect())
    }

    fn reverse(&self, ip: IpAddr) -> Result<Vec<String>, ResolveError> {
        let response = self.inner.reverse_lookup(ip)?;
        Ok(response.iter().map(|name| name.to_utf8()).collect())
    }
}
