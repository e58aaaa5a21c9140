//! Treeviz formatter for parsed documents
//!
//! A visual tree of the document, one node per line:
//!
//! <prefix><connector> <icon> <label> (labels truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Document (2 blocks)
//! ├─ ¶ Hello bold world!
//! │ ├─ ◦ Hello
//! │ ├─ 𝐁 bold world
//! │ └─ ◦ !
//! └─ 𝒱 Happiness Is a Warm Gun

use super::icons::get_icon;
use crate::ast::{Block, Document};
use crate::error::FormatError;
use crate::format::Format;

const LABEL_WIDTH: usize = 30;

fn label(text: &str) -> String {
    let flat = text.replace('\n', "↵");
    if flat.chars().count() > LABEL_WIDTH {
        let truncated: String = flat.chars().take(LABEL_WIDTH - 1).collect();
        format!("{truncated}…")
    } else {
        flat
    }
}

fn format_block(block: &Block, is_last: bool) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let mut output = format!(
        "{connector} {} {}\n",
        get_icon(block.node_type()),
        label(&block.text())
    );

    if let Block::Paragraph(spans) = block {
        let child_prefix = if is_last { "  " } else { "│ " };
        for (i, span) in spans.iter().enumerate() {
            let connector = if i + 1 == spans.len() { "└─" } else { "├─" };
            output.push_str(&format!(
                "{child_prefix}{connector} {} {}\n",
                get_icon(span.kind.node_type()),
                label(&span.text)
            ));
        }
    }
    output
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!(
        "{} Document ({} blocks)\n",
        get_icon("Document"),
        doc.blocks.len()
    );
    let count = doc.blocks.len();
    for (i, block) in doc.blocks.iter().enumerate() {
        output.push_str(&format_block(block, i + 1 == count));
    }
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
