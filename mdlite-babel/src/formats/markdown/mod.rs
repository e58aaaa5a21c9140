//! Markdown format implementation
//!
//! This module implements both directions for the restricted Markdown dialect: parsing source
//! text into a [`Document`] and writing a [`Document`] back out as markup.
//!
//! # Element Mapping Table
//!
//! | Element        | Markup                 | Notes                                        |
//! |----------------|------------------------|----------------------------------------------|
//! | Paragraph      | Running text           | Everything outside fences, one per run       |
//! | Preformatted   | Fence lines (```)      | Content copied verbatim, no inline scanning  |
//! | Span:          |                        |                                              |
//! |   Plain        | Text                   | Unmatched delimiters stay literal            |
//! |   Bold         | `**bold**`             | A single `*` is never a delimiter            |
//! |   Italic       | `_italic_`             | Word-internal underscores stay literal       |
//! |   Monospace    | `` `code` ``           | Other markup inside is literal or an error   |
//!
//! # Errors
//!
//! - Any span or fence left open at the end of its block: `Unclosed tag was found`
//! - A second markup kind opened inside an open span: `Nested tag was found`
//!
//! # Lossy Conversions
//!
//! - Whitespace-only text between fences is dropped
//! - A final line break of the source is dropped

pub mod parser;
pub mod scanner;
pub mod serializer;

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for the restricted Markdown dialect
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown with bold, italic, monospace and fenced preformatted blocks"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parser::parse_document(source)?)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(doc))
    }
}
