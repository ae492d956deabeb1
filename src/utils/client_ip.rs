//! Working address derivation from request metadata.

use axum::http::HeaderMap;
use std::net::SocketAddr;

const IPV4_MAPPED_PREFIX: &str = "::ffff:";

/// Picks the address a lookup runs against.
///
/// An explicit, non-empty `requested` address wins. Otherwise the first entry
/// of the comma-separated `fallback` list is used, trimmed, with every
/// `::ffff:` prefix removed. The result is not validated.
pub fn working_address(requested: Option<&str>, fallback: Option<&str>) -> String {
    if let Some(ip) = requested.filter(|ip| !ip.is_empty()) {
        return ip.to_string();
    }

    fallback
        .unwrap_or_default()
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .replace(IPV4_MAPPED_PREFIX, "")
}

/// Returns the origin metadata used when no address is requested explicitly.
///
/// With `behind_proxy` set, a present `X-Forwarded-For` header is returned
/// verbatim; otherwise the peer socket address is used.
pub fn fallback_source(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy
        && let Some(forwarded) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
    {
        return forwarded.to_string();
    }

    peer.ip().to_string()
}
