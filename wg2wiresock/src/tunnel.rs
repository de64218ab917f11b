use tracing::debug;
use wg_ini_core::{parse, parse_strict, ParseError, Section, INTERFACE, PEER};

use crate::diagnostics::{
    Diagnostics, MISSING_DNS, MISSING_INTERFACE_SECTION, MISSING_PEER_SECTION,
};

/// The full-tunnel default that gets dropped when switching to a partial tunnel.
pub const FULL_TUNNEL_ALLOWED_IPS: &str = "AllowedIPs = 0.0.0.0/0, ::/0";

/// Interface and peer blocks of the source config, ready for re-emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunnelConfig {
    pub interface: Section,
    pub peer: Section,
    /// Value of the interface `DNS` key, trimmed; empty when absent.
    pub dns_server: String,
    /// Whether the full-tunnel `AllowedIPs` line was found and removed.
    pub full_tunnel_removed: bool,
}

/// Split raw config text and prepare it for partial tunnelling.
///
/// In lenient mode a missing section header only adds a warning and the
/// section is treated as empty; in strict mode it is an error.
pub fn extract_tunnel(
    raw: &str,
    strict: bool,
    diags: &mut Diagnostics,
) -> Result<TunnelConfig, ParseError> {
    let doc = if strict { parse_strict(raw)? } else { parse(raw) };

    let interface = doc.interface.unwrap_or_else(|| {
        diags.warn(
            MISSING_INTERFACE_SECTION,
            "no [Interface] section found; continuing with an empty one",
            None,
        );
        Section::empty(INTERFACE)
    });
    let mut peer = doc.peer.unwrap_or_else(|| {
        diags.warn(
            MISSING_PEER_SECTION,
            "no [Peer] section found; continuing with an empty one",
            None,
        );
        Section::empty(PEER)
    });

    let dns_server = interface.get("DNS").unwrap_or_default().to_string();
    if dns_server.is_empty() {
        diags.warn(
            MISSING_DNS,
            "no DNS server in [Interface]; DNS leak protection hooks will have no server to set",
            None,
        );
    }

    let full_tunnel_removed = peer.remove_line(FULL_TUNNEL_ALLOWED_IPS);
    debug!(dns = %dns_server, full_tunnel_removed, "extracted tunnel sections");

    Ok(TunnelConfig {
        interface,
        peer,
        dns_server,
        full_tunnel_removed,
    })
}
