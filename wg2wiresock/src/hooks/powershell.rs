use crate::settings::Settings;

use super::{HookAction, HookRenderer, HookScript, HostRoute};

const ACTIVE_ADAPTERS: &str = "(Get-NetAdapter | Where-Object Status -eq 'Up').Name";
const BACKUP_ADAPTER_DNS: &str =
    "$b[$n] = (Get-DnsClientServerAddress -InterfaceAlias $n -AddressFamily IPv4).ServerAddresses";
const RESTORE_ADAPTER_DNS: &str = "if ($b[$n]) { Set-DnsClientServerAddress -InterfaceAlias $n -ServerAddresses $b[$n] } \
else { Set-DnsClientServerAddress -InterfaceAlias $n -ResetServerAddresses }";
const DISABLE_IPV6: &str = "Disable-NetAdapterBinding -Name $n -ComponentID ms_tcpip6";
const ENABLE_IPV6: &str = "Enable-NetAdapterBinding -Name $n -ComponentID ms_tcpip6";

/// Renders hooks as one `powershell -Command "..."` line for Windows hosts.
///
/// Adapter-scoped actions share one loop per hook. Inside the command,
/// `$f` is the backup file, `$b` the adapter-to-DNS table and `$n` the
/// adapter name of the current iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerShellRenderer {
    shell: String,
}

impl PowerShellRenderer {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.shell.clone())
    }
}

impl Default for PowerShellRenderer {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl HookRenderer for PowerShellRenderer {
    fn render(&self, script: &HookScript) -> String {
        format!("{} \"{}\"", self.shell, render_statements(script).join("; "))
    }
}

fn render_statements(script: &HookScript) -> Vec<String> {
    let actions = script.actions();
    let mut out = Vec::new();

    let backup_file = actions.iter().find_map(|a| match a {
        HookAction::BackupDns { backup_file } | HookAction::RestoreDns { backup_file } => {
            Some(backup_file.as_str())
        }
        _ => None,
    });
    if let Some(file) = backup_file {
        out.push(format!("$f = Join-Path $env:TEMP {}", quote(file)));
    }

    let per_adapter: Vec<String> = actions.iter().filter_map(adapter_statement).collect();
    if !per_adapter.is_empty() {
        let body = per_adapter.join("; ");
        let restoring = actions
            .iter()
            .any(|a| matches!(a, HookAction::RestoreDns { .. }));
        let backing_up = actions
            .iter()
            .any(|a| matches!(a, HookAction::BackupDns { .. }));

        if restoring {
            out.push(format!(
                "if (Test-Path $f) {{ $b = Import-Clixml -Path $f; foreach ($n in $b.Keys) {{ {body} }}; Remove-Item -Path $f }}"
            ));
        } else {
            if backing_up {
                out.push("$b = @{}".to_string());
            }
            out.push(format!("foreach ($n in {ACTIVE_ADAPTERS}) {{ {body} }}"));
            if backing_up {
                out.push("$b | Export-Clixml -Path $f".to_string());
            }
        }
    }

    out.extend(actions.iter().filter_map(route_statement));
    out
}

fn adapter_statement(action: &HookAction) -> Option<String> {
    let statement = match action {
        HookAction::BackupDns { .. } => BACKUP_ADAPTER_DNS.to_string(),
        HookAction::SetDns { server } => format!(
            "Set-DnsClientServerAddress -InterfaceAlias $n -ServerAddresses {}",
            quote(server)
        ),
        HookAction::DisableIpv6 => DISABLE_IPV6.to_string(),
        HookAction::RestoreDns { .. } => RESTORE_ADAPTER_DNS.to_string(),
        HookAction::EnableIpv6 => ENABLE_IPV6.to_string(),
        HookAction::AddRoute { .. } | HookAction::DeleteRoute { .. } => return None,
    };
    Some(statement)
}

fn route_statement(action: &HookAction) -> Option<String> {
    match action {
        HookAction::AddRoute { route, metric } => Some(format!(
            "{} metric {metric}",
            route_command("add", route)
        )),
        HookAction::DeleteRoute { route } => Some(route_command("delete", route)),
        _ => None,
    }
}

fn route_command(verb: &str, route: &HostRoute) -> String {
    let mut parts = vec![
        "route".to_string(),
        verb.to_string(),
        bare(&route.destination),
        "mask".to_string(),
        bare(&route.mask),
    ];
    if !route.gateway.is_empty() {
        parts.push(bare(&route.gateway));
    }
    parts.join(" ")
}

/// Single-quoted PowerShell literal, safe inside the outer double quotes.
fn quote(value: &str) -> String {
    format!("'{}'", bare(&value.replace('\'', "''")))
}

fn bare(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::PowerShellRenderer;
    use crate::hooks::{build_hooks, HookRenderer};
    use crate::routes::ProcessedRoute;
    use crate::settings::Settings;

    fn render_pair(dns: &str, routes: &[&str]) -> (String, String) {
        let routes: Vec<ProcessedRoute> = routes
            .iter()
            .map(|r| ProcessedRoute::literal(r).expect("ipv4 literal"))
            .collect();
        let hooks = build_hooks(dns, &routes, &Settings::default());
        let renderer = PowerShellRenderer::default();
        (renderer.render(&hooks.post_up), renderer.render(&hooks.post_down))
    }

    #[test]
    fn post_up_renders_backup_override_and_routes() {
        let (up, _) = render_pair("10.0.0.1", &["192.168.1.0/24"]);

        assert_eq!(
            up,
            "powershell -NoProfile -ExecutionPolicy Bypass -Command \"\
$f = Join-Path $env:TEMP 'wg2wiresock-dns-backup.xml'; \
$b = @{}; \
foreach ($n in (Get-NetAdapter | Where-Object Status -eq 'Up').Name) { \
$b[$n] = (Get-DnsClientServerAddress -InterfaceAlias $n -AddressFamily IPv4).ServerAddresses; \
Set-DnsClientServerAddress -InterfaceAlias $n -ServerAddresses '10.0.0.1'; \
Disable-NetAdapterBinding -Name $n -ComponentID ms_tcpip6 }; \
$b | Export-Clixml -Path $f; \
route add 192.168.1.0/24 mask 255.255.255.255 10.0.0.1 metric 5\""
        );
    }

    #[test]
    fn post_down_restores_only_when_backup_exists() {
        let (_, down) = render_pair("10.0.0.1", &["192.168.1.0/24"]);

        assert!(down.contains(
            "if (Test-Path $f) { $b = Import-Clixml -Path $f; foreach ($n in $b.Keys) {"
        ));
        assert!(down.contains("-ResetServerAddresses"));
        assert!(down.contains("Enable-NetAdapterBinding -Name $n -ComponentID ms_tcpip6"));
        assert!(down.contains("Remove-Item -Path $f }"));
        assert!(down.ends_with("route delete 192.168.1.0/24 mask 255.255.255.255 10.0.0.1\""));
        assert!(!down.contains("metric"));
    }

    #[test]
    fn no_routes_means_no_route_commands() {
        let (up, down) = render_pair("10.0.0.1", &[]);

        assert!(!up.contains("route add"));
        assert!(!down.contains("route delete"));
        assert!(up.contains("Disable-NetAdapterBinding"));
        assert!(down.contains("Import-Clixml"));
    }

    #[test]
    fn empty_dns_still_renders() {
        let (up, down) = render_pair("", &["10.0.0.0/8"]);

        assert!(up.contains("-ServerAddresses ''"));
        assert!(up.contains("route add 10.0.0.0/8 mask 255.255.255.255 metric 5"));
        assert!(down.contains("route delete 10.0.0.0/8 mask 255.255.255.255\""));
    }

    #[test]
    fn quotes_in_values_cannot_break_out() {
        let (up, _) = render_pair("it's\"x", &[]);
        assert!(up.contains("-ServerAddresses 'it''s\\\"x'"));
    }
}
