//! Command line front end for the conversion pipeline.
//!
//! Owns everything the library deliberately leaves out: prompting, file
//! I/O, choosing a resolver and presenting diagnostics.

use std::fs;
use std::io;

use anyhow::{Context, Result};
use tracing::info;
use wg2wiresock::pipeline::convert;
use wg2wiresock::report::{render_diagnostics, render_summary, RunSummary};
use wg2wiresock::routes::collector::{collect_routes, load_routes_file, prompt_routes};
use wg2wiresock::routes::{HostResolver, StaticResolver, SystemResolver};
use wg2wiresock::settings::{default_settings, load_settings};
use wg_ini_core::write_file;

use crate::cli::{Cli, OutputFormat};
use crate::path_guard::ensure_output_not_same;
use crate::prompt::prompt_path;

/// Run one conversion.
///
/// # Errors
///
/// Returns error if:
/// - the settings, routes or hosts file cannot be read or parsed
/// - the output path resolves to the input path
/// - the input config cannot be read
/// - a section is missing while strict section checking is on
/// - the output config cannot be written
///
/// Everything else (missing DNS, rejected or unresolvable routes) is reported
/// as a warning and the run continues.
pub fn run_convert(args: Cli) -> Result<()> {
    let mut settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => default_settings(),
    };
    if args.strict_sections {
        settings.strict_sections = true;
    }

    // Prompts go to stderr so stdout only carries the result.
    let stdin = io::stdin();
    let mut answers = stdin.lock();
    let mut prompts = io::stderr();

    let input = match &args.input {
        Some(path) => path.clone(),
        None => prompt_path(&mut answers, &mut prompts, "Input file", &settings.default_input)
            .context("failed to read input file name")?,
    };
    let output = match &args.output {
        Some(path) => path.clone(),
        None => prompt_path(
            &mut answers,
            &mut prompts,
            "Output file",
            &settings.default_output,
        )
        .context("failed to read output file name")?,
    };
    ensure_output_not_same(&output, &input)?;

    let raw = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let entries = if args.has_route_source() {
        let from_file = match &args.routes_file {
            Some(path) => load_routes_file(path)?,
            None => Vec::new(),
        };
        collect_routes(&args.routes, from_file)
    } else {
        prompt_routes(&mut answers, &mut prompts).context("failed to read route entries")?
    };

    let resolver: Box<dyn HostResolver> = match &args.hosts_file {
        Some(path) => Box::new(StaticResolver::from_hosts_file(path)?),
        None => Box::new(SystemResolver::new()),
    };

    let conversion = convert(&raw, &entries, resolver.as_ref(), &settings)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    write_file(&conversion.document, &output)
        .with_context(|| format!("failed to write output config {}", output.display()))?;
    info!(output = %output.display(), routes = conversion.routes.len(), "wrote WireSock config");

    if !args.quiet && !conversion.diagnostics.is_empty() {
        eprintln!("{}", render_diagnostics(&conversion.diagnostics));
    }

    let summary = RunSummary::new(
        &input.display().to_string(),
        &output.display().to_string(),
        &conversion,
    );
    match args.format {
        OutputFormat::Text => {
            if !args.quiet {
                println!("{}", render_summary(&summary));
            }
            println!("Wrote {}", output.display());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}
