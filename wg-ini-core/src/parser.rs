use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::document::{ConfigDocument, INTERFACE, PEER};
use crate::section::Section;

const INTERFACE_MARKER: &str = "[Interface]";
const PEER_MARKER: &str = "[Peer]";

/// Errors that can occur while reading a config into a [`ConfigDocument`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read input file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// A required section header is absent.
    #[error("missing [{0}] section")]
    MissingSection(&'static str),
}

/// Split config text into its interface and peer sections.
///
/// Splitting is marker based and lenient:
///
/// - the interface body runs from `[Interface]` to the next `[Peer]` (or end
///   of text);
/// - the peer body runs from the first `[Peer]` to the end of text, so any
///   additional sections stay inside it verbatim.
///
/// A missing marker yields `None` for that section; use [`parse_strict`] to
/// turn that into an error.
pub fn parse(text: &str) -> ConfigDocument {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let interface = text.find(INTERFACE_MARKER).map(|start| {
        let rest = &text[start + INTERFACE_MARKER.len()..];
        let end = rest.find(PEER_MARKER).unwrap_or(rest.len());
        Section::new(INTERFACE, &rest[..end])
    });

    let peer = text
        .find(PEER_MARKER)
        .map(|start| Section::new(PEER, &text[start + PEER_MARKER.len()..]));

    ConfigDocument { interface, peer }
}

/// Like [`parse`], but fail when either section header is absent.
pub fn parse_strict(text: &str) -> Result<ConfigDocument, ParseError> {
    let doc = parse(text);
    doc.require_interface()?;
    doc.require_peer()?;
    Ok(doc)
}

/// Read and split a config file.
pub fn parse_file(path: &Path) -> Result<ConfigDocument, ParseError> {
    let raw = fs::read_to_string(path)?;
    Ok(parse(&raw))
}
