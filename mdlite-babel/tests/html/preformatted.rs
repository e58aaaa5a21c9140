//! Fenced preformatted blocks in HTML export

use crate::common::{html_error, to_html};
use insta::assert_snapshot;
use mdlite_babel::{MarkupError, MarkupKind};

#[test]
fn test_preformatted_becomes_pre_tag() {
    assert_eq!(
        to_html("```\nHappiness Is a Warm Gun\n```"),
        "<pre>\nHappiness Is a Warm Gun\n</pre>"
    );
}

#[test]
fn test_markup_inside_preformatted_is_verbatim() {
    let markdown =
        "```\n**Living** is _easy_ with eyes closed \n`Misunderstanding` all you see\n```";
    assert_eq!(
        to_html(markdown),
        "<pre>\n**Living** is _easy_ with eyes closed \n`Misunderstanding` all you see\n</pre>"
    );
}

#[test]
fn test_unclosed_markup_inside_preformatted_is_verbatim() {
    let markdown = "```\nPlease **could you _stop the noise? \nI'm trying `to get some rest\n```";
    assert_eq!(
        to_html(markdown),
        "<pre>\nPlease **could you _stop the noise? \nI'm trying `to get some rest\n</pre>"
    );
}

#[test]
fn test_nested_markup_inside_preformatted_is_verbatim() {
    let markdown = "```\nAnd **_everything_** _`under`_ the sun is in tune \nBut the sun is **_eclipsed_** by the moon\n```";
    assert_eq!(
        to_html(markdown),
        "<pre>\nAnd **_everything_** _`under`_ the sun is in tune \nBut the sun is **_eclipsed_** by the moon\n</pre>"
    );
}

#[test]
fn test_unclosed_preformatted_fails() {
    let markdown = "```\nClose to the end, down by the corner \nDown at the edge, round by a river\n";
    let err = html_error(markdown);
    assert_eq!(err.to_string(), "Unclosed tag was found");
    assert_eq!(
        err,
        MarkupError::Unclosed {
            kind: MarkupKind::Preformatted,
            offset: 0,
        }
    );
}

#[test]
fn test_mixed_document() {
    let markdown = "Run **this**:\n```\ncargo _build_\n```\nthen `check`.";
    assert_snapshot!(to_html(markdown), @r"
    <p>Run <b>this</b>:
    </p>
    <pre>
    cargo _build_
    </pre>
    <p>then <tt>check</tt>.
    </p>
    ");
}

#[test]
fn test_blank_lines_around_blocks_are_trimmed() {
    assert_eq!(to_html("a\n\n"), "<p>a\n</p>");
    assert_eq!(
        to_html("a\n\n```\nx\n```\n\n"),
        "<p>a\n</p>\n<pre>\nx\n</pre>"
    );
}

#[test]
fn test_whitespace_only_input_is_empty_paragraph() {
    assert_eq!(to_html("   "), "<p>\n</p>");
    assert_eq!(to_html("   \n```\nx\n```"), "<pre>\nx\n</pre>");
}
