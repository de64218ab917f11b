use once_cell::sync::Lazy;
use regex::Regex;

static IPV4_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}(/[0-9]{1,2})?$").expect("static regex is valid")
});

static FQDN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("static regex is valid"));

/// What a single route entry turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// Dotted-quad address with an optional prefix length. Syntactic only.
    Ipv4Literal(String),
    /// Host name that needs an A record lookup.
    Fqdn(String),
    /// Anything containing `:`; IPv6 routes are not supported.
    Ipv6Rejected(String),
    /// None of the above.
    Invalid(String),
}

/// Classify one route entry.
///
/// Order is fixed: IPv4 pattern, then FQDN pattern, then "contains a colon",
/// then invalid. Octet values and prefix lengths are not range checked.
pub fn classify(entry: &str) -> RouteKind {
    let value = entry.to_string();
    if IPV4_LITERAL.is_match(entry) {
        RouteKind::Ipv4Literal(value)
    } else if FQDN.is_match(entry) {
        RouteKind::Fqdn(value)
    } else if entry.contains(':') {
        RouteKind::Ipv6Rejected(value)
    } else {
        RouteKind::Invalid(value)
    }
}
