use wg_ini_core::ConfigDocument;

use crate::routes::ProcessedRoute;
use crate::tunnel::TunnelConfig;

/// Rendered hook command lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHooks {
    pub post_up: String,
    pub post_down: String,
}

/// Join routes the way `AllowedIPs` expects them: comma and space.
pub fn allowed_ips(routes: &[ProcessedRoute]) -> String {
    routes
        .iter()
        .map(ProcessedRoute::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Assemble the WireSock document.
///
/// The interface block gains `PostUp` and `PostDown`; the peer block gains
/// an `AllowedIPs` line listing exactly the processed routes.
pub fn build_document(
    tunnel: &TunnelConfig,
    hooks: &RenderedHooks,
    routes: &[ProcessedRoute],
) -> ConfigDocument {
    let mut interface = tunnel.interface.clone();
    interface.push_entry("PostUp", &hooks.post_up);
    interface.push_entry("PostDown", &hooks.post_down);

    let mut peer = tunnel.peer.clone();
    peer.push_entry("AllowedIPs", &allowed_ips(routes));

    ConfigDocument::new(interface, peer)
}
