//! WireGuard to WireSock split-tunnel config conversion.
//!
//! Takes a WireGuard config with a full-tunnel peer and produces a WireSock
//! config that only routes selected destinations through the tunnel, while
//! PostUp/PostDown hooks pin every active adapter to the tunnel's DNS server
//! and switch IPv6 off for the lifetime of the connection. The tool never
//! touches the network configuration itself; it only writes text that the
//! tunnel client executes later.
//!
//! # Architecture
//!
//! - [`tunnel`]: Split the source config, extract DNS, drop the full-tunnel `AllowedIPs`
//! - [`routes`]: Collect, classify and resolve route entries
//!   - [`routes::classify`]: IPv4 / FQDN / IPv6 / invalid classification
//!   - [`routes::resolve`]: System (hickory) and static host resolvers
//!   - [`routes::collector`]: Interactive, flag and file route sources
//! - [`hooks`]: Typed PostUp/PostDown actions and the PowerShell renderer
//! - [`emit`]: Output document assembly
//! - [`pipeline`]: Runs the stages above in order
//! - [`diagnostics`]: Ordered non-fatal findings
//! - [`report`]: Terminal and JSON presentation of a run
//! - [`settings`]: Embedded defaults and TOML overrides
//!
//! # Examples
//!
//! ```
//! use std::net::Ipv4Addr;
//!
//! use wg2wiresock::pipeline::convert;
//! use wg2wiresock::routes::StaticResolver;
//! use wg2wiresock::settings::Settings;
//!
//! let raw = "[Interface]\nDNS = 10.0.0.1\n[Peer]\nAllowedIPs = 0.0.0.0/0, ::/0\n";
//! let resolver = StaticResolver::new().with_host("example.com", Ipv4Addr::new(93, 184, 216, 34));
//! let routes = vec!["192.168.1.0/24".to_string(), "example.com".to_string()];
//!
//! let conversion = convert(raw, &routes, &resolver, &Settings::default()).unwrap();
//! assert!(conversion
//!     .output()
//!     .contains("AllowedIPs = 192.168.1.0/24, 93.184.216.34/32"));
//! ```
//!
//! # Built on wg-ini-core
//!
//! Section splitting and rendering come from `wg-ini-core`; everything
//! WireSock-specific lives in this crate.

pub mod diagnostics;
pub mod emit;
pub mod hooks;
pub mod pipeline;
pub mod report;
pub mod routes;
pub mod settings;
pub mod tunnel;
