//! PostUp / PostDown hook generation.
//!
//! Hooks are built as ordered lists of [`HookAction`]s first and only turned
//! into command text by a [`HookRenderer`]. The action lists carry the
//! contract (what must happen on connect and disconnect); the renderer owns
//! the syntax.

pub mod powershell;

use serde::Serialize;

use crate::routes::ProcessedRoute;
use crate::settings::Settings;

pub use powershell::PowerShellRenderer;

/// A static route as passed to the OS route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRoute {
    pub destination: String,
    pub mask: String,
    pub gateway: String,
}

/// One atomic step of a hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HookAction {
    /// Save every active adapter's IPv4 DNS servers, keyed by adapter name.
    BackupDns { backup_file: String },
    /// Point every active adapter at `server`.
    SetDns { server: String },
    /// Unbind IPv6 from every active adapter.
    DisableIpv6,
    AddRoute { route: HostRoute, metric: u32 },
    /// If a backup exists, put every saved adapter's DNS servers back and
    /// delete the backup.
    RestoreDns { backup_file: String },
    /// Rebind IPv6 on every adapter the hook touches.
    EnableIpv6,
    DeleteRoute { route: HostRoute },
}

/// Ordered actions making up one hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HookScript {
    actions: Vec<HookAction>,
}

impl HookScript {
    pub fn new(actions: Vec<HookAction>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[HookAction] {
        &self.actions
    }

    /// Routes this script adds, in order.
    pub fn added_routes(&self) -> Vec<&HostRoute> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                HookAction::AddRoute { route, .. } => Some(route),
                _ => None,
            })
            .collect()
    }

    /// Routes this script deletes, in order.
    pub fn deleted_routes(&self) -> Vec<&HostRoute> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                HookAction::DeleteRoute { route } => Some(route),
                _ => None,
            })
            .collect()
    }
}

/// Connect and disconnect hooks for one tunnel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookPair {
    pub post_up: HookScript,
    pub post_down: HookScript,
}

impl HookPair {
    /// `true` when PostDown removes exactly the routes PostUp adds.
    pub fn routes_balanced(&self) -> bool {
        self.post_up.added_routes() == self.post_down.deleted_routes()
    }
}

/// Turns a [`HookScript`] into a single-line command.
pub trait HookRenderer {
    fn render(&self, script: &HookScript) -> String;
}

/// Build the hook pair for `dns_server` and `routes`.
///
/// DNS backup/override and the IPv6 toggle are always present, even with
/// no routes. Every route becomes a single-host route via the DNS server.
pub fn build_hooks(dns_server: &str, routes: &[ProcessedRoute], settings: &Settings) -> HookPair {
    let host_routes: Vec<HostRoute> = routes
        .iter()
        .map(|route| HostRoute {
            destination: route.to_string(),
            mask: settings.host_mask.clone(),
            gateway: dns_server.to_string(),
        })
        .collect();

    let mut up = vec![
        HookAction::BackupDns {
            backup_file: settings.backup_file_name.clone(),
        },
        HookAction::SetDns {
            server: dns_server.to_string(),
        },
        HookAction::DisableIpv6,
    ];
    up.extend(host_routes.iter().cloned().map(|route| HookAction::AddRoute {
        route,
        metric: settings.route_metric,
    }));

    let mut down = vec![
        HookAction::RestoreDns {
            backup_file: settings.backup_file_name.clone(),
        },
        HookAction::EnableIpv6,
    ];
    down.extend(
        host_routes
            .into_iter()
            .map(|route| HookAction::DeleteRoute { route }),
    );

    HookPair {
        post_up: HookScript::new(up),
        post_down: HookScript::new(down),
    }
}
