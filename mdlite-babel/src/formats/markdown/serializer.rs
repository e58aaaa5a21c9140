//! Markdown serialization
//!
//! Writes a [`Document`] back out in the dialect the parser reads. Blocks are separated by a
//! single line break; preformatted blocks get their fence lines back.

use super::parser::FENCE;
use crate::ast::{Block, Document, SpanKind};

pub fn serialize_to_markdown(doc: &Document) -> String {
    doc.blocks
        .iter()
        .map(block_to_markdown)
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_to_markdown(block: &Block) -> String {
    match block {
        Block::Paragraph(spans) => {
            let mut out = String::new();
            for span in spans {
                let delimiter = match span.kind {
                    SpanKind::Plain => "",
                    SpanKind::Bold => "**",
                    SpanKind::Italic => "_",
                    SpanKind::Monospace => "`",
                };
                out.push_str(delimiter);
                out.push_str(&span.text);
                out.push_str(delimiter);
            }
            out
        }
        Block::Preformatted(content) => format!("{FENCE}\n{content}\n{FENCE}"),
    }
}
