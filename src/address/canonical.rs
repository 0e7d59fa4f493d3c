//! Canonical client address form.
//!
//! Produces a value suitable for comparing one client against another:
//! IPv4 addresses are kept as they are, IPv6 addresses are reduced to their
//! /64 prefix, and anything else becomes the empty string.

use std::net::Ipv6Addr;

use ipnet::Ipv6Net;

/// Prefix length kept when collapsing an IPv6 address.
pub const IPV6_PREFIX_LEN: u8 = 64;

/// How a raw address string was classified by its first separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    V4,
    V6,
    Unknown,
}

/// Classify by whichever of `.` or `:` appears first.
///
/// A `.` before any `:` means IPv4, even when a port-like suffix follows.
fn classify(raw: &str) -> Family {
    for b in raw.bytes() {
        match b {
            b'.' => return Family::V4,
            b':' => return Family::V6,
            _ => {}
        }
    }
    Family::Unknown
}

/// Canonicalize a raw address string.
///
/// - IPv4-looking input is returned unchanged (no validation).
/// - IPv6 input is parsed, masked to [`IPV6_PREFIX_LEN`] bits and rendered
///   in compressed form, e.g. `42e7:9f02:2ced:9303::`.
/// - Malformed IPv6 or input with neither `.` nor `:` yields `""`.
pub fn canonicalize(raw: &str) -> String {
    match classify(raw) {
        Family::V4 => raw.to_string(),
        Family::V6 => mask_v6(raw).map(|addr| addr.to_string()).unwrap_or_default(),
        Family::Unknown => String::new(),
    }
}

fn mask_v6(raw: &str) -> Option<Ipv6Addr> {
    let addr: Ipv6Addr = raw.parse().ok()?;
    let net = Ipv6Net::new(addr, IPV6_PREFIX_LEN).ok()?;
    Some(net.network())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_passthrough() {
        assert_eq!(canonicalize("48.135.12.111"), "48.135.12.111");
        // Not validated, only classified.
        assert_eq!(canonicalize("999.1"), "999.1");
        assert_eq!(canonicalize("1.2.3.4:99"), "1.2.3.4:99");
    }

    #[test]
    fn test_ipv6_masked_to_prefix() {
        assert_eq!(
            canonicalize("42e7:9f02:2ced:9303:2691:cd2e:7f9d:8ae3"),
            "42e7:9f02:2ced:9303::"
        );
        assert_eq!(canonicalize("2001:db8::1"), "2001:db8::");
        assert_eq!(canonicalize("::1"), "::");
        assert_eq!(canonicalize("2001:0:0:1::1"), "2001:0:0:1::");
    }

    #[test]
    fn test_same_subnet_collapses() {
        let a = canonicalize("2001:db8:aaaa:bbbb:1:2:3:4");
        let b = canonicalize("2001:db8:aaaa:bbbb:ffff:eeee:dddd:cccc");
        assert_eq!(a, b);
        assert_ne!(a, canonicalize("2001:db8:aaaa:bbbc::1"));
    }

    #[test]
    fn test_embedded_ipv4_is_ipv6() {
        // ':' appears before '.', so this is parsed as IPv6.
        assert_eq!(canonicalize("::ffff:10.0.0.1"), "::");
        assert_eq!(canonicalize("64:ff9b:1:2::10.0.0.1"), "64:ff9b:1:2::");
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("123456789"), "");
        assert_eq!(canonicalize("localhost"), "");
        assert_eq!(canonicalize("123:456789"), "");
        assert_eq!(canonicalize("[::1]:8080"), "");
        assert_eq!(canonicalize("fe80::1%eth0"), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "48.135.12.111",
            "42e7:9f02:2ced:9303:2691:cd2e:7f9d:8ae3",
            "::1",
            "garbage",
            "123:456789",
            "1.2.3.4:99",
        ] {
            let once = canonicalize(raw);
            assert_eq!(canonicalize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
