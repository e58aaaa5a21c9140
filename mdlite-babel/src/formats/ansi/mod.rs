//! ANSI terminal format
//!
//! Renders a document for a terminal using SGR escape sequences:
//!
//! | Element       | Sequence                         |
//! |---------------|----------------------------------|
//! | Bold          | `ESC[1m` ... `ESC[22m`           |
//! | Italic        | `ESC[3m` ... `ESC[23m`           |
//! | Monospace     | `ESC[7m` ... `ESC[27m` (inverse) |
//! | Preformatted  | `ESC[7m` ... `ESC[27m` (inverse) |
//!
//! Every block ends with a line break; blocks are separated by one more.

use crate::ast::{Block, Document, SpanKind};
use crate::error::FormatError;
use crate::format::Format;

const BOLD: (&str, &str) = ("\x1b[1m", "\x1b[22m");
const ITALIC: (&str, &str) = ("\x1b[3m", "\x1b[23m");
const INVERSE: (&str, &str) = ("\x1b[7m", "\x1b[27m");

pub fn serialize_to_ansi(doc: &Document) -> String {
    doc.blocks
        .iter()
        .map(block_to_ansi)
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_to_ansi(block: &Block) -> String {
    let mut out = String::new();
    match block {
        Block::Paragraph(spans) => {
            for span in spans {
                let style = match span.kind {
                    SpanKind::Plain => None,
                    SpanKind::Bold => Some(BOLD),
                    SpanKind::Italic => Some(ITALIC),
                    SpanKind::Monospace => Some(INVERSE),
                };
                match style {
                    Some((on, off)) => {
                        out.push_str(on);
                        out.push_str(&span.text);
                        out.push_str(off);
                    }
                    None => out.push_str(&span.text),
                }
            }
        }
        Block::Preformatted(content) => {
            out.push_str(INVERSE.0);
            out.push_str(content);
            out.push_str(INVERSE.1);
        }
    }
    out.push('\n');
    out
}

/// Format implementation for ANSI terminal output
pub struct AnsiFormat;

impl Format for AnsiFormat {
    fn name(&self) -> &str {
        "ansi"
    }

    fn description(&self) -> &str {
        "Terminal text styled with ANSI escape sequences"
    }

    fn file_extensions(&self) -> &[&str] {
        &["ansi"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_ansi(doc))
    }
}
