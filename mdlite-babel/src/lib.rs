//! Restricted Markdown conversion
//!
//!     This crate parses a small Markdown dialect (bold `**`, italic `_`, monospace `` ` `` and
//!     fenced preformatted blocks) and writes it out as HTML, ANSI terminal text, the dialect
//!     itself, or a debugging tree.
//!
//!     This is a pure lib: it powers mdlite-cli but never touches the filesystem, the
//!     environment or stdout. Input is one complete string, output is one complete string.
//!
//!     The file structure :
//!     .
//!     ├── ast.rs                  # Document, Block, Span
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── parser.rs       # Block segmentation
//!     │   │   ├── scanner.rs      # Inline span scanner
//!     │   │   └── serializer.rs
//!     │   ├── html
//!     │   ├── ansi
//!     │   └── treeviz
//!     └── lib.rs
//!
//! Core Algorithm
//!
//!     All of the interesting work is in formats/markdown/scanner.rs: delimiters only count when
//!     their neighbours allow it, at most one span is open at a time, and nesting or unclosed
//!     markup fails the whole conversion. See that module for the rules.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     └── <format>
//!         └── <topic>.rs

pub mod ast;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use ast::{Block, Document, MarkupKind, Span, SpanKind};
pub use error::{FormatError, MarkupError};
pub use format::Format;
pub use registry::FormatRegistry;

/// Name of the source format every conversion parses from
pub const SOURCE_FORMAT: &str = "markdown";

/// Options for [`convert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Target format name, as registered in [`FormatRegistry`]
    pub format: String,
}

impl ConvertOptions {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new("html")
    }
}

/// Converts markup to the format named in `options`.
///
/// Fails with [`FormatError::FormatNotFound`] for an unknown format and with
/// [`FormatError::Markup`] for malformed markup.
pub fn convert(markup: &str, options: &ConvertOptions) -> Result<String, FormatError> {
    FormatRegistry::default().convert(markup, SOURCE_FORMAT, &options.format)
}

/// Parses markup into a [`Document`] without serializing it.
pub fn parse(markup: &str) -> Result<Document, MarkupError> {
    formats::markdown::parser::parse_document(markup)
}
