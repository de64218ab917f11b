use std::fmt::{self, Display, Formatter};

use crate::parser::ParseError;
use crate::section::Section;

/// Section name of the local tunnel endpoint.
pub const INTERFACE: &str = "Interface";
/// Section name of the remote tunnel endpoint.
pub const PEER: &str = "Peer";

/// A config split into its interface and peer sections.
///
/// `None` means the section header was not present at all, which is
/// distinct from a header followed by an empty body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    pub interface: Option<Section>,
    pub peer: Option<Section>,
}

impl ConfigDocument {
    /// Build a document from two present sections.
    pub fn new(interface: Section, peer: Section) -> Self {
        Self {
            interface: Some(interface),
            peer: Some(peer),
        }
    }

    /// Return the interface section or a [`ParseError::MissingSection`].
    pub fn require_interface(&self) -> Result<&Section, ParseError> {
        self.interface
            .as_ref()
            .ok_or(ParseError::MissingSection(INTERFACE))
    }

    /// Return the peer section or a [`ParseError::MissingSection`].
    pub fn require_peer(&self) -> Result<&Section, ParseError> {
        self.peer.as_ref().ok_or(ParseError::MissingSection(PEER))
    }
}

impl Display for ConfigDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for section in [&self.interface, &self.peer].into_iter().flatten() {
            if !first {
                writeln!(f)?;
            }
            writeln!(f, "{section}")?;
            first = false;
        }
        Ok(())
    }
}
