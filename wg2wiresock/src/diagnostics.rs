//! Non-fatal findings collected while converting a config.
//!
//! Nothing in the pipeline prints. Every step pushes its findings here, in
//! the order they happen, and the caller decides how to present them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// One finding: a stable code, a human message and the offending literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

pub const MISSING_DNS: &str = "missing_dns";
pub const MISSING_INTERFACE_SECTION: &str = "missing_interface_section";
pub const MISSING_PEER_SECTION: &str = "missing_peer_section";
pub const UNRESOLVED_FQDN: &str = "unresolved_fqdn";
pub const IPV6_UNSUPPORTED: &str = "ipv6_unsupported";
pub const INVALID_ROUTE: &str = "invalid_route";
pub const DUPLICATE_ROUTE: &str = "duplicate_route";

/// Ordered collection of [`Diagnostic`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, code: &str, message: impl Into<String>, value: Option<&str>) {
        self.push(Severity::Warning, code, message, value);
    }

    pub fn info(&mut self, code: &str, message: impl Into<String>, value: Option<&str>) {
        self.push(Severity::Info, code, message, value);
    }

    fn push(
        &mut self,
        severity: Severity,
        code: &str,
        message: impl Into<String>,
        value: Option<&str>,
    ) {
        self.entries.push(Diagnostic {
            severity,
            code: code.to_string(),
            message: message.into(),
            value: value.map(ToOwned::to_owned),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn warnings(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Codes in recorded order; handy for assertions.
    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.code.as_str()).collect()
    }
}
