//! Error types for parsing and format operations

use crate::ast::MarkupKind;
use thiserror::Error;

/// Malformed markup. Both variants end the conversion; no partial output is produced.
///
/// The display strings are fixed. Offsets are byte offsets into the converted source and are
/// only there for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// An opening delimiter (or fence) had no matching close before its block ended
    #[error("Unclosed tag was found")]
    Unclosed { kind: MarkupKind, offset: usize },
    /// A second kind of markup was opened while another span was still open
    #[error("Nested tag was found")]
    Nested {
        outer: MarkupKind,
        inner: MarkupKind,
        offset: usize,
    },
}

impl MarkupError {
    /// Byte offset of the offending delimiter
    pub fn offset(&self) -> usize {
        match self {
            MarkupError::Unclosed { offset, .. } | MarkupError::Nested { offset, .. } => *offset,
        }
    }

    /// Longer explanation for logs and verbose CLI output
    pub fn detail(&self) -> String {
        match self {
            MarkupError::Unclosed { kind, offset } => format!(
                "{kind} markup opened with `{}` at byte {offset} is never closed",
                kind.delimiter()
            ),
            MarkupError::Nested {
                outer,
                inner,
                offset,
            } => format!("{inner} markup at byte {offset} is nested inside {outer} markup"),
        }
    }
}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The source could not be parsed
    #[error(transparent)]
    Markup(#[from] MarkupError),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
