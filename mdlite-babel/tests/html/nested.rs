//! Nested markup is always rejected

use crate::common::html_error;
use mdlite_babel::{MarkupError, MarkupKind};

fn assert_nested(markdown: &str, outer: MarkupKind, inner: MarkupKind) {
    let err = html_error(markdown);
    assert_eq!(err.to_string(), "Nested tag was found");
    match err {
        MarkupError::Nested {
            outer: got_outer,
            inner: got_inner,
            ..
        } => {
            assert_eq!(got_outer, outer);
            assert_eq!(got_inner, inner);
        }
        other => panic!("expected a nested error, got {other:?}"),
    }
}

#[test]
fn test_bold_italic_and_monospace() {
    assert_nested(
        "**`_Ringo Starr_`** is an English musician, songwriter and the drummer for the Beatles",
        MarkupKind::Bold,
        MarkupKind::Monospace,
    );
}

#[test]
fn test_bold_and_italic() {
    assert_nested(
        "**_Sir James Paul McCartney_** is an English singer, songwriter and musician who gained worldwide fame with the Beatles",
        MarkupKind::Bold,
        MarkupKind::Italic,
    );
}

#[test]
fn test_bold_and_monospace() {
    assert_nested(
        "**`John Winston Ono Lennon`** was an English singer, songwriter and musician who gained worldwide fame as the co-leader of the Beatles",
        MarkupKind::Bold,
        MarkupKind::Monospace,
    );
}

#[test]
fn test_monospace_and_italic() {
    assert_nested(
        "`_George Harrison_` was an English musician, singer and songwriter who achieved international fame as the lead guitarist of the Beatles",
        MarkupKind::Monospace,
        MarkupKind::Italic,
    );
}

#[test]
fn test_italic_and_bold() {
    assert_nested("_**X**_", MarkupKind::Italic, MarkupKind::Bold);
}

#[test]
fn test_nested_inside_running_text() {
    assert_nested(
        "Some _italic with `code` inside_ here",
        MarkupKind::Italic,
        MarkupKind::Monospace,
    );
}

#[test]
fn test_interleaved_markup() {
    assert_nested("_a **b_ c**", MarkupKind::Italic, MarkupKind::Bold);
}
