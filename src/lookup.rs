//! Lookup strategy selection and execution.
//!
//! The decision tree: an input token is either an IP address literal, in
//! which case its classification picks the lookup direction (or rejects it),
//! or a hostname, which is forward-resolved. Both single-token and batch
//! mode go through [`resolve_token`]; private and public unicast addresses
//! take the same reverse-lookup branch.

use std::net::IpAddr;

use crate::classify::{classify_ip, AddressClass};
use crate::error_handling::LookupError;
use crate::output::{OutputSink, Severity};
use crate::resolver::HostResolver;

/// How a token will be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Reverse lookup (address to hostname list)
    Reverse(IpAddr),
    /// Forward lookup (hostname to address list)
    Forward(String),
    /// No lookup at all; the token resolves to an empty result set
    Skip,
}

/// Picks the lookup strategy for one input token.
///
/// Evaluated in this exact order:
/// 1. Try to parse the token as an IP address literal.
/// 2. Loopback addresses are rejected immediately, before any lookup.
/// 3. Public global-unicast and RFC1918 addresses are reverse-resolved;
///    other reserved space (multicast, link-local, broadcast, unspecified)
///    is silently skipped.
/// 4. Anything that is not an address literal is treated as a hostname.
///
/// # Errors
///
/// Returns [`LookupError::LoopbackInput`] for loopback addresses.
pub fn select_strategy(token: &str) -> Result<Strategy, LookupError> {
    match token.parse::<IpAddr>() {
        Ok(ip) => match classify_ip(ip) {
            AddressClass::Loopback => Err(LookupError::LoopbackInput),
            AddressClass::PublicUnicast | AddressClass::PrivateRfc1918 => {
                Ok(Strategy::Reverse(ip))
            }
            AddressClass::Reserved | AddressClass::NotAnAddress => Ok(Strategy::Skip),
        },
        Err(_) => Ok(Strategy::Forward(token.to_string())),
    }
}

/// Resolves one input token to an ordered list of names or addresses.
///
/// Emits the `Resolving : <token>` progress notice through the sink before
/// any lookup is performed. Skipped tokens produce an empty list without
/// touching the resolver or the sink.
///
/// # Errors
///
/// Returns [`LookupError::LoopbackInput`] for loopback input and
/// [`LookupError::Resolver`] when the underlying lookup fails.
pub fn resolve_token(
    token: &str,
    resolver: &dyn HostResolver,
    sink: &mut dyn OutputSink,
) -> Result<Vec<String>, LookupError> {
    match select_strategy(token)? {
        Strategy::Skip => Ok(Vec::new()),
        Strategy::Reverse(ip) => {
            announce(sink, token);
            let names = resolver.reverse(ip)?;
            Ok(names)
        }
        Strategy::Forward(host) => {
            announce(sink, token);
            let addrs = resolver.forward(&host)?;
            Ok(addrs.into_iter().map(|ip| ip.to_string()).collect())
        }
    }
}

fn announce(sink: &mut dyn OutputSink, token: &str) {
    sink.write_line(Severity::Progress, &format!("Resolving : {token}"));
    sink.write_line(Severity::Progress, "");
}
