//! Priority-ordered client address resolution.

use std::borrow::Cow;

use axum::http::{HeaderMap, Request};

use crate::address::{canonicalize, split_host_port};
use crate::http::request::PeerAddr;
use crate::lookup::headers::{first_hop, header_value, DEFAULT_HEADERS, X_FORWARDED_FOR};

/// Pick the raw client address for a request.
///
/// Sources, highest precedence first:
/// 1. `overrides`, in order
/// 2. [`DEFAULT_HEADERS`], in order
/// 3. the first hop of `X-Forwarded-For`
/// 4. the host part of `peer_addr`
///
/// The first non-empty source is returned as-is, with bytes that are not
/// valid UTF-8 replaced. Returns `""` when no source yields anything.
pub fn resolve<'a, S: AsRef<str>>(
    headers: &'a HeaderMap,
    peer_addr: &'a str,
    overrides: &[S],
) -> Cow<'a, str> {
    for name in overrides {
        if let Some(ip) = header_value(headers, name.as_ref()) {
            return String::from_utf8_lossy(ip);
        }
    }

    for name in DEFAULT_HEADERS {
        if let Some(ip) = header_value(headers, name) {
            return String::from_utf8_lossy(ip);
        }
    }

    if let Some(chain) = header_value(headers, X_FORWARDED_FOR) {
        return String::from_utf8_lossy(first_hop(chain));
    }

    let host = split_host_port(peer_addr)
        .map(|(host, _port)| host)
        .unwrap_or_default();
    Cow::Borrowed(host)
}

/// Resolve and canonicalize the client address of a request.
///
/// Reads the request's headers and its current [`PeerAddr`]. Returns the
/// canonical address, or `""` when none could be determined.
pub fn lookup_from_request<B, S: AsRef<str>>(req: &Request<B>, overrides: &[S]) -> String {
    let peer = PeerAddr::of(req);
    let raw = resolve(req.headers(), peer.as_str(), overrides);
    if raw.is_empty() {
        tracing::trace!(peer_addr = %peer, "No client address source found");
        return String::new();
    }
    canonicalize(&raw)
}
