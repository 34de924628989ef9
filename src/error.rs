//! Error types shared by the parser, resolver and reporters.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = PermgenError> = std::result::Result<T, E>;

/// Structural problems quick-xml does not report on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    NoRootElement,
    MultipleRootElements,
    UnclosedElement,
    TextOutsideRoot,
}

impl Malformation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Malformation::NoRootElement => "document has no root element",
            Malformation::MultipleRootElements => "document has more than one root element",
            Malformation::UnclosedElement => "element is not closed before end of input",
            Malformation::TextOutsideRoot => "text content outside the root element",
        }
    }
}

/// Failures while turning a manifest and resource directory into records
#[derive(Error, Diagnostic, Debug)]
pub enum PermgenError {
    #[error("Failed to read {}", path.display())]
    #[diagnostic(code(permgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list resource directory {}", path.display())]
    #[diagnostic(
        code(permgen::resource_dir),
        help("-r must point at a readable directory such as res/values")
    )]
    ResourceDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} is not well-formed XML (byte {position})", path.display())]
    #[diagnostic(code(permgen::xml))]
    Xml {
        path: PathBuf,
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("{} is not well-formed XML: {}", path.display(), kind.as_str())]
    #[diagnostic(code(permgen::xml))]
    Malformed { path: PathBuf, kind: Malformation },

    #[error("String resource '{name}' in {} has no text content", path.display())]
    #[diagnostic(
        code(permgen::empty_string),
        help("set resources.empty_strings = \"skip\" to ignore empty entries")
    )]
    EmptyString { path: PathBuf, name: String },
}
