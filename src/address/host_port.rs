//! `host:port` splitting for transport peer addresses.

/// Split a `host:port` or `[host]:port` string into its host and port.
///
/// Returns `None` when the port separator is missing, when an unbracketed
/// host contains a `:`, or when brackets are unbalanced or misplaced. The
/// port itself is not validated and may be empty.
pub fn split_host_port(addr: &str) -> Option<(&str, &str)> {
    let last_colon = addr.rfind(':')?;

    let (host, host_start, host_end) = if addr.starts_with('[') {
        let close = addr.find(']')?;
        // The closing bracket must be followed directly by the last ':'.
        if close + 1 != last_colon {
            return None;
        }
        (&addr[1..close], 1, close + 1)
    } else {
        let host = &addr[..last_colon];
        if host.contains(':') {
            return None;
        }
        (host, 0, 0)
    };

    if addr[host_start..].contains('[') || addr[host_end..].contains(']') {
        return None;
    }

    Some((host, &addr[last_colon + 1..]))
}
