//! Shared helpers for the integration tests

use mdlite_babel::{convert, ConvertOptions, FormatError, MarkupError};

pub fn to_html(markup: &str) -> String {
    convert(markup, &ConvertOptions::new("html")).expect("conversion to succeed")
}

pub fn html_error(markup: &str) -> MarkupError {
    match convert(markup, &ConvertOptions::new("html")) {
        Err(FormatError::Markup(err)) => err,
        other => panic!("expected a markup error, got {other:?}"),
    }
}
