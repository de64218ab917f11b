use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable values used while generating WireSock configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Input path offered when none is given on the command line.
    pub default_input: String,
    /// Output path offered when none is given on the command line.
    pub default_output: String,
    /// Metric for every static host route added by the PostUp hook.
    pub route_metric: u32,
    /// Netmask passed with every static route.
    pub host_mask: String,
    /// File name, inside the user's temp directory, holding the DNS backup.
    pub backup_file_name: String,
    /// Command prefix the hook script is passed to.
    pub shell: String,
    /// Treat a missing `[Interface]` or `[Peer]` header as fatal.
    pub strict_sections: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_input: "wg0.conf".to_string(),
            default_output: "ws0.conf".to_string(),
            route_metric: 5,
            host_mask: "255.255.255.255".to_string(),
            backup_file_name: "wg2wiresock-dns-backup.xml".to_string(),
            shell: "powershell -NoProfile -ExecutionPolicy Bypass -Command".to_string(),
            strict_sections: false,
        }
    }
}

/// Errors returned when loading settings files.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load settings from a TOML file. Keys not present keep their defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_settings(&raw, path.display().to_string())
}

/// Built-in settings shipped with the binary.
pub fn default_settings() -> Settings {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/defaults/settings.toml"
    ));
    parse_settings(embedded, "embedded settings".to_string()).unwrap_or_default()
}

fn parse_settings(raw: &str, path: String) -> Result<Settings, SettingsError> {
    toml::from_str(raw).map_err(|source| SettingsError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::{default_settings, parse_settings, Settings, SettingsError};

    #[test]
    fn embedded_defaults_match_builtin_defaults() {
        assert_eq!(default_settings(), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings =
            parse_settings("route_metric = 25\n", "inline".to_string()).expect("valid toml");
        assert_eq!(settings.route_metric, 25);
        assert_eq!(settings.default_output, "ws0.conf");
        assert_eq!(settings.host_mask, "255.255.255.255");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_settings("metric = 5\n", "inline".to_string()).expect_err("unknown key");
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
