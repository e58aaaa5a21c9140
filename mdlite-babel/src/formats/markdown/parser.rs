//! Block segmentation
//!
//!     Splits the source into preformatted and paragraph blocks, then hands paragraph text to
//!     the inline scanner.
//!
//!     - A line that is exactly "```" (a trailing `\r` is ignored) toggles preformatted mode.
//!       Fence lines are delimiters and never part of the content.
//!     - Lines between two fences are copied verbatim.
//!     - The lines between fences (or the document edges) form one paragraph. There is no
//!       blank-line paragraph splitting. Leading and trailing line breaks of the run are
//!       trimmed and whitespace-only runs are dropped.
//!     - A single trailing line terminator at the end of the source is ignored.
//!     - A source with no blocks at all is a single empty paragraph.

use super::scanner::scan_inline;
use crate::ast::{Block, Document, MarkupKind};
use crate::error::MarkupError;
use tracing::debug;

/// Line that opens and closes a preformatted block
pub const FENCE: &str = "```";

const LINE_BREAK: [char; 2] = ['\r', '\n'];

/// Parse restricted markup into a [`Document`]
pub fn parse_document(source: &str) -> Result<Document, MarkupError> {
    let source = strip_final_line_break(source);
    let mut blocks = Vec::new();
    let mut lines: Vec<&str> = Vec::new();
    let mut run_start = 0;
    let mut open_fence: Option<usize> = None;
    let mut offset = 0;

    for line in source.split('\n') {
        if is_fence(line) {
            match open_fence.take() {
                Some(_) => blocks.push(Block::Preformatted(lines.join("\n"))),
                None => {
                    push_paragraph(&mut blocks, &lines, run_start)?;
                    open_fence = Some(offset);
                }
            }
            lines.clear();
            run_start = offset + line.len() + 1;
        } else {
            lines.push(line);
        }
        offset += line.len() + 1;
    }

    if let Some(at) = open_fence {
        debug!(offset = at, "preformatted block left open");
        return Err(MarkupError::Unclosed {
            kind: MarkupKind::Preformatted,
            offset: at,
        });
    }
    push_paragraph(&mut blocks, &lines, run_start)?;

    if blocks.is_empty() {
        blocks.push(Block::Paragraph(Vec::new()));
    }

    debug!(blocks = blocks.len(), "segmented document");
    Ok(Document::new(blocks))
}

fn is_fence(line: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == FENCE
}

fn strip_final_line_break(source: &str) -> &str {
    source
        .strip_suffix("\r\n")
        .or_else(|| source.strip_suffix('\n'))
        .unwrap_or(source)
}

fn push_paragraph(
    blocks: &mut Vec<Block>,
    lines: &[&str],
    start: usize,
) -> Result<(), MarkupError> {
    let joined = lines.join("\n");
    if joined.trim().is_empty() {
        return Ok(());
    }
    let text = joined.trim_start_matches(LINE_BREAK);
    let start = start + (joined.len() - text.len());
    let text = text.trim_end_matches(LINE_BREAK);
    blocks.push(Block::Paragraph(scan_inline(text, start)?));
    Ok(())
}
