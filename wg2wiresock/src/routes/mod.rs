//! Route entry collection, classification and resolution.

pub mod classify;
pub mod collector;
pub mod resolve;

use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;

use serde::Serialize;
use tracing::debug;

use crate::diagnostics::{
    Diagnostics, DUPLICATE_ROUTE, INVALID_ROUTE, IPV6_UNSUPPORTED, UNRESOLVED_FQDN,
};
pub use classify::{classify, RouteKind};
pub use resolve::{HostResolver, ResolveError, StaticResolver, SystemResolver};

/// An IPv4 destination, `a.b.c.d` or `a.b.c.d/n`, ready to be routed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProcessedRoute(String);

impl ProcessedRoute {
    /// Single-host route for a resolved address.
    pub fn host(addr: Ipv4Addr) -> Self {
        Self(format!("{addr}/32"))
    }

    /// Route taken verbatim from an IPv4 literal entry.
    ///
    /// Returns `None` unless `value` classifies as [`RouteKind::Ipv4Literal`].
    pub fn literal(value: &str) -> Option<Self> {
        match classify(value) {
            RouteKind::Ipv4Literal(v) => Some(Self(v)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProcessedRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classify and resolve entries in order, keeping only usable IPv4 routes.
///
/// A rejected or unresolvable entry adds one warning naming it and never
/// stops the remaining entries from being processed.
pub fn process_routes(
    entries: &[String],
    resolver: &dyn HostResolver,
    diags: &mut Diagnostics,
) -> Vec<ProcessedRoute> {
    let mut routes = Vec::with_capacity(entries.len());
    let mut seen = HashSet::new();

    for entry in entries {
        let kind = classify(entry.trim());
        debug!(entry = %entry, ?kind, "classified route entry");

        let route = match kind {
            RouteKind::Ipv4Literal(value) => Some(ProcessedRoute(value)),
            RouteKind::Fqdn(host) => match resolver.resolve_ipv4(&host) {
                Ok(addr) => {
                    debug!(%host, %addr, "resolved route host");
                    Some(ProcessedRoute::host(addr))
                }
                Err(err) => {
                    diags.warn(
                        UNRESOLVED_FQDN,
                        format!("could not resolve {host}, skipping it ({err})"),
                        Some(host.as_str()),
                    );
                    None
                }
            },
            RouteKind::Ipv6Rejected(value) => {
                diags.warn(
                    IPV6_UNSUPPORTED,
                    format!("IPv6 routes are not supported, skipping {value}"),
                    Some(value.as_str()),
                );
                None
            }
            RouteKind::Invalid(value) => {
                diags.warn(
                    INVALID_ROUTE,
                    format!("{value} is not an IPv4 address, range or domain, skipping it"),
                    Some(value.as_str()),
                );
                None
            }
        };

        if let Some(route) = route {
            if !seen.insert(route.clone()) {
                diags.info(
                    DUPLICATE_ROUTE,
                    format!("{route} is listed more than once"),
                    Some(route.as_str()),
                );
            }
            routes.push(route);
        }
    }

    routes
}
