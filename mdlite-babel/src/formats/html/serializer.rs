//! HTML serialization

use crate::ast::{Block, Document, Span, SpanKind};

pub fn serialize_to_html(doc: &Document) -> String {
    doc.blocks
        .iter()
        .map(block_to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_to_html(block: &Block) -> String {
    match block {
        Block::Paragraph(spans) => {
            let mut out = String::from("<p>");
            for span in spans {
                push_span(&mut out, span);
            }
            out.push_str("\n</p>");
            out
        }
        Block::Preformatted(content) => format!("<pre>\n{content}\n</pre>"),
    }
}

fn push_span(out: &mut String, span: &Span) {
    match tag_name(span.kind) {
        Some(tag) => {
            out.push('<');
            out.push_str(tag);
            out.push('>');
            out.push_str(&span.text);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        None => out.push_str(&span.text),
    }
}

fn tag_name(kind: SpanKind) -> Option<&'static str> {
    match kind {
        SpanKind::Plain => None,
        SpanKind::Bold => Some("b"),
        SpanKind::Italic => Some("i"),
        SpanKind::Monospace => Some("tt"),
    }
}
