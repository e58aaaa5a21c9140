//! HTML format implementation
//!
//! Export only. The output is an HTML fragment, not a full page: no document wrapper, no CSS.
//!
//! # Element Mapping Table
//!
//! | Element       | HTML                          |
//! |---------------|-------------------------------|
//! | Paragraph     | `<p>{spans}\n</p>`            |
//! | Preformatted  | `<pre>\n{content}\n</pre>`    |
//! | Bold          | `<b>`                         |
//! | Italic        | `<i>`                         |
//! | Monospace     | `<tt>`                        |
//!
//! Blocks are joined with a single line break. Text is written as-is; no entity escaping is
//! applied.

mod serializer;

pub use serializer::serialize_to_html;

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for HTML
#[derive(Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment using <p>, <pre>, <b>, <i> and <tt>"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_html(doc))
    }
}
