//! WireGuard to WireSock conversion pipeline.
//!
//! The stages run strictly in order and nothing loops back:
//!
//! 1. **Parse**: split the source config and pull out the DNS server
//! 2. **Classify**: turn route entries into IPv4 routes (FQDNs are resolved)
//! 3. **Hooks**: build the PostUp/PostDown action lists and render them
//! 4. **Emit**: assemble the output document
//!
//! No stage reads or writes files; the caller owns I/O. Given the same input
//! and a deterministic resolver the output is byte-identical between runs.

use thiserror::Error;
use tracing::info;
use wg_ini_core::{write, ConfigDocument, ParseError};

use crate::diagnostics::Diagnostics;
use crate::emit::{build_document, RenderedHooks};
use crate::hooks::{build_hooks, HookPair, HookRenderer, PowerShellRenderer};
use crate::routes::{process_routes, HostResolver, ProcessedRoute};
use crate::settings::Settings;
use crate::tunnel::{extract_tunnel, TunnelConfig};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Everything produced by one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub tunnel: TunnelConfig,
    pub routes: Vec<ProcessedRoute>,
    pub hooks: HookPair,
    pub rendered: RenderedHooks,
    pub document: ConfigDocument,
    pub diagnostics: Diagnostics,
}

impl Conversion {
    /// Output config text.
    pub fn output(&self) -> String {
        write(&self.document)
    }
}

/// Convert with the PowerShell renderer configured by `settings`.
pub fn convert(
    raw: &str,
    entries: &[String],
    resolver: &dyn HostResolver,
    settings: &Settings,
) -> Result<Conversion, ConvertError> {
    let renderer = PowerShellRenderer::from_settings(settings);
    convert_with_renderer(raw, entries, resolver, &renderer, settings)
}

/// Convert with a caller-supplied hook renderer.
pub fn convert_with_renderer(
    raw: &str,
    entries: &[String],
    resolver: &dyn HostResolver,
    renderer: &dyn HookRenderer,
    settings: &Settings,
) -> Result<Conversion, ConvertError> {
    let mut diagnostics = Diagnostics::new();

    let tunnel = extract_tunnel(raw, settings.strict_sections, &mut diagnostics)?;
    let routes = process_routes(entries, resolver, &mut diagnostics);
    info!(
        entries = entries.len(),
        routes = routes.len(),
        "route entries processed"
    );

    let hooks = build_hooks(&tunnel.dns_server, &routes, settings);
    debug_assert!(hooks.routes_balanced(), "PostDown must delete every PostUp route");
    let rendered = RenderedHooks {
        post_up: renderer.render(&hooks.post_up),
        post_down: renderer.render(&hooks.post_down),
    };
    let document = build_document(&tunnel, &rendered, &routes);

    Ok(Conversion {
        tunnel,
        routes,
        hooks,
        rendered,
        document,
        diagnostics,
    })
}
