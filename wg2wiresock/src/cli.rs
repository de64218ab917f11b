use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "wg2wiresock")]
#[command(about = "Convert a WireGuard config into a WireSock split-tunnel config")]
#[command(version)]
pub struct Cli {
    /// WireGuard config to read (prompted for when omitted).
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// WireSock config to write (prompted for when omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Route entry: IPv4 address, CIDR range or domain name. Repeatable; skips the route prompt.
    #[arg(short, long = "route", value_name = "ENTRY")]
    pub routes: Vec<String>,
    /// File with one route entry per line (`#` comments allowed); skips the route prompt.
    #[arg(long)]
    pub routes_file: Option<PathBuf>,
    /// Resolve domain names from a hosts(5) style file instead of DNS.
    #[arg(long)]
    pub hosts_file: Option<PathBuf>,
    /// TOML settings file overriding the built-in defaults.
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Fail when the [Interface] or [Peer] section is missing.
    #[arg(long)]
    pub strict_sections: bool,
    /// Run summary format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Suppress warnings and the run summary.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether route entries come from flags or a file instead of a prompt.
    pub fn has_route_source(&self) -> bool {
        !self.routes.is_empty() || self.routes_file.is_some()
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
