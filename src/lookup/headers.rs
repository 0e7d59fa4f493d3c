//! Header names consulted during lookup.

use axum::http::HeaderMap;

/// Client address headers set by common proxies and CDNs, highest
/// precedence first.
pub const DEFAULT_HEADERS: [&str; 8] = [
    "DO_Connecting-IP", // DigitalOcean
    "DO-Connecting-IP",
    "True-Client-IP",
    "X-Real-IP",
    "CF-Connecting-IP", // Cloudflare
    "Fastly-Client-IP",
    "X-Cluster-Client-IP",
    "X-Client-IP",
];

/// Multi-hop forwarding chain, leftmost entry is the original client.
pub const X_FORWARDED_FOR: &str = "X-Forwarded-For";

/// Separator between hops in [`X_FORWARDED_FOR`].
pub const FORWARDED_FOR_SEPARATOR: &[u8] = b", ";

/// Raw bytes of the first value of `name`, if present and non-empty.
///
/// Values are not required to be text; obs-text bytes are kept so the
/// canonicalizer decides what they are worth. Names that are not valid
/// header names are treated as absent.
pub fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a [u8]> {
    headers
        .get(name)
        .map(|v| v.as_bytes())
        .filter(|v| !v.is_empty())
}

/// Leftmost entry of a forwarding chain.
pub fn first_hop(chain: &[u8]) -> &[u8] {
    chain
        .windows(FORWARDED_FOR_SEPARATOR.len())
        .position(|w| w == FORWARDED_FOR_SEPARATOR)
        .map_or(chain, |i| &chain[..i])
}
