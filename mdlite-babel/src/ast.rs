//! Document model produced by the markup parser
//!
//!     A document is a flat sequence of blocks. Paragraph blocks carry inline spans, each tagged
//!     with at most one markup kind; preformatted blocks carry their content verbatim.
//!
//!     There is no nesting anywhere in this model: nested inline markup is rejected by the
//!     scanner, so a span never contains another span. Allowing nesting later would turn
//!     `Span::text` into a list of children and the scanner state into a stack.

use serde::Serialize;
use std::fmt;

/// A parsed document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

/// Top-level block of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Block {
    /// Running text, split into inline spans
    Paragraph(Vec<Span>),
    /// Content between two fence lines, kept byte for byte
    Preformatted(String),
}

impl Block {
    /// Node name used by the tree visualisations
    pub fn node_type(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "Paragraph",
            Block::Preformatted(_) => "Preformatted",
        }
    }

    /// Text of the block with markup delimiters removed
    pub fn text(&self) -> String {
        match self {
            Block::Paragraph(spans) => spans.iter().map(|span| span.text.as_str()).collect(),
            Block::Preformatted(content) => content.clone(),
        }
    }
}

/// A run of paragraph text sharing one markup kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Italic, text)
    }

    pub fn monospace(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Monospace, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Monospace,
}

impl SpanKind {
    pub fn node_type(&self) -> &'static str {
        match self {
            SpanKind::Plain => "Text",
            SpanKind::Bold => "Bold",
            SpanKind::Italic => "Italic",
            SpanKind::Monospace => "Monospace",
        }
    }
}

/// Every construct that opens with a delimiter and must be closed again.
///
/// Carried by parse errors to say which construct was left open or nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupKind {
    Bold,
    Italic,
    Monospace,
    Preformatted,
}

impl MarkupKind {
    /// The literal delimiter for this construct
    pub fn delimiter(&self) -> &'static str {
        match self {
            MarkupKind::Bold => "**",
            MarkupKind::Italic => "_",
            MarkupKind::Monospace => "`",
            MarkupKind::Preformatted => "```",
        }
    }
}

impl fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarkupKind::Bold => "bold",
            MarkupKind::Italic => "italic",
            MarkupKind::Monospace => "monospace",
            MarkupKind::Preformatted => "preformatted",
        };
        f.write_str(name)
    }
}
