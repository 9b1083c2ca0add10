//! IP address classification.
//!
//! This module decides what kind of address an input token is before any
//! lookup strategy is chosen: loopback, RFC1918 private, public global
//! unicast, other reserved space, or not an address at all.

use std::net::IpAddr;
use std::sync::LazyLock;

use ipnetwork::Ipv4Network;

/// The three reserved private IPv4 ranges defined by RFC1918.
const RFC1918_BLOCKS: [&str; 3] = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"];

// Parsed once at startup. These literals are hard-coded, so a parse failure
// is a fatal configuration error: crash rather than silently classify every
// address as public.
static PRIVATE_BLOCKS: LazyLock<[Ipv4Network; 3]> = LazyLock::new(|| {
    RFC1918_BLOCKS.map(|block| {
        block
            .parse()
            .unwrap_or_else(|e| panic!("invalid RFC1918 block {block}: {e}"))
    })
});

/// Classification of an input token.
///
/// Derived transiently from the token's bytes; a pure function of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressClass {
    /// The loopback address (127.0.0.0/8 or ::1)
    Loopback,
    /// An address inside one of the RFC1918 private ranges
    PrivateRfc1918,
    /// A publicly routable global-unicast address outside RFC1918 space
    PublicUnicast,
    /// Parses as an address but is neither of the above (multicast,
    /// link-local, unspecified, broadcast)
    Reserved,
    /// Does not parse as an IP address literal
    NotAnAddress,
}

/// Is the given IP in RFC1918 space.
///
/// Tests containment against the three private blocks in order, true on the
/// first match. RFC1918 only covers IPv4; IPv6 addresses are never private
/// under this test.
pub fn is_rfc1918(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => PRIVATE_BLOCKS.iter().any(|block| block.contains(v4)),
        IpAddr::V6(_) => false,
    }
}

/// Is the given IP a global-unicast address.
///
/// Global unicast here means routable unicast: not unspecified, not
/// loopback, not multicast, not link-local, and (for IPv4) not the limited
/// broadcast address. RFC1918 addresses count as global unicast; privateness
/// is a separate axis tested by [`is_rfc1918`].
pub fn is_global_unicast(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            !(v4.is_unspecified()
                || v4.is_loopback()
                || v4.is_multicast()
                || v4.is_broadcast()
                || v4.is_link_local())
        }
        IpAddr::V6(v6) => {
            !(v6.is_unspecified()
                || v6.is_loopback()
                || v6.is_multicast()
                || v6.is_unicast_link_local())
        }
    }
}

/// Classifies an already-parsed IP address.
pub fn classify_ip(ip: IpAddr) -> AddressClass {
    if ip.is_loopback() {
        AddressClass::Loopback
    } else if is_rfc1918(ip) {
        AddressClass::PrivateRfc1918
    } else if is_global_unicast(ip) {
        AddressClass::PublicUnicast
    } else {
        AddressClass::Reserved
    }
}

/// Classifies a raw input token.
///
/// Tokens that fail to parse as an IPv4 or IPv6 literal classify as
/// [`AddressClass::NotAnAddress`] and are treated as hostnames downstream.
pub fn classify(token: &str) -> AddressClass {
    match token.parse::<IpAddr>() {
        Ok(ip) => classify_ip(ip),
        Err(_) => AddressClass::NotAnAddress,
    }
}
