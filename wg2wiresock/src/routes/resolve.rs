//! Forward lookups for FQDN route entries.
//!
//! The classifier only needs "host name in, first IPv4 address out", so the
//! lookup sits behind [`HostResolver`]. [`SystemResolver`] asks the host's
//! configured DNS servers; [`StaticResolver`] answers from a fixed table and
//! never touches the network.

use std::collections::HashMap;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use hickory_resolver::config::LookupIpStrategy;
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::Resolver;
use once_cell::unsync::OnceCell;
use thiserror::Error;
use tracing::debug;

/// Errors from a single lookup.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no IPv4 address found for {0}")]
    NoAddress(String),
    #[error("lookup for {host} failed: {message}")]
    Lookup { host: String, message: String },
    #[error("system resolver unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned when loading a hosts table.
#[derive(Debug, Error)]
pub enum HostsLoadError {
    #[error("failed to read hosts file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Resolve a host name to one IPv4 address.
pub trait HostResolver {
    fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, ResolveError>;
}

/// Blocking resolver backed by the system DNS configuration.
///
/// The underlying resolver is created on first use, so a run without any
/// FQDN entries never reads the system config.
#[derive(Default)]
pub struct SystemResolver {
    inner: OnceCell<Resolver>,
}

impl SystemResolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolver(&self) -> Result<&Resolver, ResolveError> {
        self.inner.get_or_try_init(|| {
            let (config, mut opts) =
                read_system_conf().map_err(|e| ResolveError::Unavailable(e.to_string()))?;
            opts.ip_strategy = LookupIpStrategy::Ipv4Only;
            Resolver::new(config, opts).map_err(|e| ResolveError::Unavailable(e.to_string()))
        })
    }
}

impl HostResolver for SystemResolver {
    fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, ResolveError> {
        let resolver = self.resolver()?;
        debug!(host, "DNS lookup");
        let lookup = resolver.lookup_ip(host).map_err(|e| ResolveError::Lookup {
            host: host.to_string(),
            message: e.to_string(),
        })?;

        lookup
            .iter()
            .find_map(|ip| match ip {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .ok_or_else(|| ResolveError::NoAddress(host.to_string()))
    }
}

/// Resolver answering from an in-memory table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticResolver {
    hosts: HashMap<String, Ipv4Addr>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry. Names are matched case-insensitively.
    pub fn with_host(mut self, host: &str, addr: Ipv4Addr) -> Self {
        self.insert(host, addr);
        self
    }

    /// Add an entry unless the name is already known; first entry wins.
    fn insert_first(&mut self, host: &str, addr: Ipv4Addr) {
        self.hosts.entry(normalize(host)).or_insert(addr);
    }

    fn insert(&mut self, host: &str, addr: Ipv4Addr) {
        self.hosts.insert(normalize(host), addr);
    }

    /// Parse hosts(5) style text: `address name [aliases...]`, `#` comments.
    ///
    /// Lines with IPv6 or malformed addresses are skipped.
    pub fn parse_hosts(raw: &str) -> Self {
        let mut resolver = Self::new();
        for line in raw.lines() {
            let line = line.split('#').next().unwrap_or_default();
            let mut fields = line.split_whitespace();
            let Some(addr) = fields.next().and_then(|a| a.parse::<Ipv4Addr>().ok()) else {
                continue;
            };
            for name in fields {
                resolver.insert_first(name, addr);
            }
        }
        resolver
    }

    /// Load a hosts(5) style file.
    pub fn from_hosts_file(path: &Path) -> Result<Self, HostsLoadError> {
        let raw = fs::read_to_string(path).map_err(|source| HostsLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse_hosts(&raw))
    }
}

impl HostResolver for StaticResolver {
    fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, ResolveError> {
        self.hosts
            .get(&normalize(host))
            .copied()
            .ok_or_else(|| ResolveError::NoAddress(host.to_string()))
    }
}

fn normalize(host: &str) -> String {
    host.trim_end_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::{HostResolver, ResolveError, StaticResolver};

    #[test]
    fn static_lookup_ignores_case_and_trailing_dot() {
        let resolver =
            StaticResolver::new().with_host("Example.COM", Ipv4Addr::new(93, 184, 216, 34));

        assert_eq!(
            resolver.resolve_ipv4("example.com.").expect("known host"),
            Ipv4Addr::new(93, 184, 216, 34)
        );
    }

    #[test]
    fn unknown_host_is_no_address() {
        let err = StaticResolver::new()
            .resolve_ipv4("nowhere.example")
            .expect_err("unknown host");
        assert!(matches!(err, ResolveError::NoAddress(host) if host == "nowhere.example"));
    }

    #[test]
    fn hosts_text_keeps_first_ipv4_entry_and_skips_ipv6() {
        let resolver = StaticResolver::parse_hosts(
            "# comment\n10.0.0.1 a.example b.example # trailing\n2001:db8::1 v6.example\n10.0.0.2 a.example\nbogus line\n",
        );

        assert_eq!(
            resolver.resolve_ipv4("a.example").expect("a"),
            Ipv4Addr::new(10, 0, 0, 1)
        );
        assert_eq!(
            resolver.resolve_ipv4("b.example").expect("b"),
            Ipv4Addr::new(10, 0, 0, 1)
        );
        assert!(resolver.resolve_ipv4("v6.example").is_err());
    }
}
