//! Format implementations
//!
//! Every format converts between the [`Document`](crate::ast::Document) model and one text
//! representation. Only `markdown` parses; the others are export targets.

pub mod ansi;
pub mod html;
pub mod icons;
pub mod markdown;
pub mod treeviz;

pub use ansi::AnsiFormat;
pub use html::HtmlFormat;
pub use markdown::MarkdownFormat;
pub use treeviz::TreevizFormat;
