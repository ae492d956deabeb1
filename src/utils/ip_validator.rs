//! Shape validation of IP address literals.
//!
//! Validation is shape-only: octet ranges are not checked and the IPv6 pattern
//! accepts any run of hex digits and colons. Callers must not treat a `true`
//! result as proof that the string parses as an [`std::net::IpAddr`].

use regex::Regex;
use std::sync::LazyLock;

static IPV4_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").expect("valid IPv4 regex"));

static IPV6_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F:]+$").expect("valid IPv6 regex"));

/// Returns true if `candidate` looks like an IPv4 or IPv6 literal.
///
/// # Examples
///
/// ```
/// use geoip_api::utils::ip_validator::is_valid_ip;
///
/// assert!(is_valid_ip("8.8.8.8"));
/// assert!(is_valid_ip("999.1.1.1"));
/// assert!(is_valid_ip("::1"));
/// assert!(!is_valid_ip("not-an-ip"));
/// ```
pub fn is_valid_ip(candidate: &str) -> bool {
    IPV4_SHAPE.is_match(candidate) || IPV6_SHAPE.is_match(candidate)
}
