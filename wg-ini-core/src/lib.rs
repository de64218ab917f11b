//! Lenient WireGuard-style INI parsing and writing primitives used by higher-level tools.

pub mod document;
pub mod parser;
pub mod section;
pub mod writer;

pub use document::{ConfigDocument, INTERFACE, PEER};
pub use parser::{parse, parse_file, parse_strict, ParseError};
pub use section::Section;
pub use writer::{write, write_file, WriteError};
