use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::document::ConfigDocument;

/// Errors that can occur while writing a [`ConfigDocument`].
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write output file.
    #[error("failed to write config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a document as config text.
///
/// Sections are separated by one blank line and the text ends with a single
/// newline. Absent sections are skipped.
pub fn write(doc: &ConfigDocument) -> String {
    doc.to_string()
}

/// Render a document and write it to `path`, replacing any existing file.
pub fn write_file(doc: &ConfigDocument, path: &Path) -> Result<(), WriteError> {
    fs::write(path, write(doc))?;
    Ok(())
}
