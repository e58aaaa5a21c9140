//! Monospace markup in HTML export

use crate::common::{html_error, to_html};

#[test]
fn test_monospace_becomes_tt_tag() {
    assert_eq!(
        to_html("Hello `monospaced world`!"),
        "<p>Hello <tt>monospaced world</tt>!\n</p>"
    );
}

#[test]
fn test_spaced_backticks_are_literal() {
    let markdown = "This ` example is not an element of the markup `";
    assert_eq!(
        to_html(markdown),
        "<p>This ` example is not an element of the markup `\n</p>"
    );
}

#[test]
fn test_single_backtick_is_literal() {
    let markdown = "Apostrophe (`) is the sixth solo album and eighteenth in total by Frank Zappa";
    assert_eq!(
        to_html(markdown),
        "<p>Apostrophe (`) is the sixth solo album and eighteenth in total by Frank Zappa\n</p>"
    );
}

#[test]
fn test_unclosed_monospace_fails() {
    let err = html_error("This example will throw an `error");
    assert_eq!(err.to_string(), "Unclosed tag was found");
}

#[test]
fn test_stray_star_inside_monospace() {
    assert_eq!(to_html("`a * b`"), "<p><tt>a * b</tt>\n</p>");
}
