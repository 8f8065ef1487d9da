use ipnet::{Ipv4Net, Ipv6Net};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// IPv4 space that never carries genuine visitor traffic.
const RESERVED_V4: [Ipv4Net; 9] = [
    Ipv4Net::new_assert(Ipv4Addr::new(0, 0, 0, 0), 8),
    Ipv4Net::new_assert(Ipv4Addr::new(10, 0, 0, 0), 8),
    Ipv4Net::new_assert(Ipv4Addr::new(100, 64, 0, 0), 10),
    Ipv4Net::new_assert(Ipv4Addr::new(127, 0, 0, 0), 8),
    Ipv4Net::new_assert(Ipv4Addr::new(169, 254, 0, 0), 16),
    Ipv4Net::new_assert(Ipv4Addr::new(172, 16, 0, 0), 12),
    Ipv4Net::new_assert(Ipv4Addr::new(192, 168, 0, 0), 16),
    Ipv4Net::new_assert(Ipv4Addr::new(224, 0, 0, 0), 24),
    Ipv4Net::new_assert(Ipv4Addr::new(240, 0, 0, 0), 4),
];

const RESERVED_V6: [Ipv6Net; 5] = [
    Ipv6Net::new_assert(Ipv6Addr::UNSPECIFIED, 128),
    Ipv6Net::new_assert(Ipv6Addr::LOCALHOST, 128),
    Ipv6Net::new_assert(Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, 0), 7),
    Ipv6Net::new_assert(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0), 10),
    Ipv6Net::new_assert(Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0, 0), 16),
];

/// Private, loopback, link-local and otherwise reserved addresses
/// (RFC 1918, RFC 6598, RFC 4193 and friends).
///
/// IPv4-mapped IPv6 addresses are judged by their IPv4 form.
pub fn is_reserved_ip(ip: IpAddr) -> bool {
    match ip.to_canonical() {
        IpAddr::V4(v4) => RESERVED_V4.iter().any(|net| net.contains(&v4)),
        IpAddr::V6(v6) => RESERVED_V6.iter().any(|net| net.contains(&v6)),
    }
}

/// Extract a canonical address from a raw log token.
///
/// Handles forwarded-for chains (`client, proxy1, proxy2`), bracketed IPv6
/// (`[::1]:9000`) and `host:port` forms. Tokens that are not IP addresses
/// (hostnames, garbage) come back trimmed but otherwise unchanged, so callers
/// can still compare them as plain strings. Never fails.
pub fn normalize_ip(raw: &str) -> String {
    let mut candidate = raw.trim();
    if candidate.is_empty() {
        return String::new();
    }

    // Forwarded-for chain: the left-most entry is the client. A chain of
    // only blank entries has no client and yields an empty address.
    if candidate.contains(',') {
        match candidate.split(',').map(str::trim).find(|s| !s.is_empty()) {
            Some(first) => candidate = first,
            None => return String::new(),
        }
    }

    if let Some(rest) = candidate.strip_prefix('[')
        && let Some(end) = rest.find(']')
        && end > 0
    {
        candidate = &rest[..end];
    }

    if let Some(host) = split_host_port(candidate) {
        candidate = host;
    } else if candidate.matches(':').count() == 1 && candidate.contains('.') {
        // `1.2.3.4:port` forms the strict split rejected. A bare IPv6
        // address has several colons, or no dots.
        if let Some((host, _)) = candidate.split_once(':')
            && !host.is_empty()
        {
            candidate = host;
        }
    }

    match candidate.parse::<IpAddr>() {
        Ok(ip) => ip.to_canonical().to_string(),
        Err(_) => candidate.to_string(),
    }
}

/// Split `host:port` or `[host]:port` and return the host.
///
/// The host of an unbracketed form must not contain a colon, which keeps
/// bare IPv6 addresses intact.
fn split_host_port(value: &str) -> Option<&str> {
    let colon = value.rfind(':')?;
    let (host, port) = (&value[..colon], &value[colon + 1..]);

    if port.contains(['[', ']']) {
        return None;
    }

    if let Some(rest) = host.strip_prefix('[') {
        let inner = rest.strip_suffix(']')?;
        if inner.contains(['[', ']']) {
            return None;
        }
        return Some(inner);
    }

    if host.contains([':', '[', ']']) {
        return None;
    }

    Some(host)
}
