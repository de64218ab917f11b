use colored::Colorize;
use serde::Serialize;

use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::hooks::HookPair;
use crate::pipeline::Conversion;
use crate::routes::ProcessedRoute;

/// Machine-readable outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub input: String,
    pub output: String,
    pub dns_server: String,
    pub full_tunnel_removed: bool,
    pub routes: Vec<ProcessedRoute>,
    pub warnings: usize,
    pub diagnostics: Diagnostics,
    /// Hook actions behind the rendered PostUp/PostDown commands.
    pub hooks: HookPair,
}

impl RunSummary {
    pub fn new(input: &str, output: &str, conversion: &Conversion) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
            dns_server: conversion.tunnel.dns_server.clone(),
            full_tunnel_removed: conversion.tunnel.full_tunnel_removed,
            routes: conversion.routes.clone(),
            warnings: conversion.diagnostics.warnings(),
            diagnostics: conversion.diagnostics.clone(),
            hooks: conversion.hooks.clone(),
        }
    }
}

/// Render one diagnostic line without colors.
pub fn format_diagnostic(diag: &Diagnostic) -> String {
    let label = match diag.severity {
        Severity::Warning => "warning",
        Severity::Info => "note",
    };
    format!("{label}: {} [{}]", diag.message, diag.code)
}

/// Render diagnostics for terminal output, warnings highlighted.
pub fn render_diagnostics(diags: &Diagnostics) -> String {
    diags
        .iter()
        .map(|diag| {
            let line = format_diagnostic(diag);
            match diag.severity {
                Severity::Warning => line.yellow().to_string(),
                Severity::Info => line.dimmed().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line run summary for terminal output.
pub fn render_summary(summary: &RunSummary) -> String {
    format!(
        "convert_summary routes={} warnings={} dns={} full_tunnel_removed={}",
        summary.routes.len(),
        summary.warnings,
        if summary.dns_server.is_empty() {
            "none"
        } else {
            summary.dns_server.as_str()
        },
        summary.full_tunnel_removed
    )
    .cyan()
    .to_string()
}
