//! ANSI terminal export

use mdlite_babel::{convert, ConvertOptions, FormatError};

fn to_ansi(markup: &str) -> String {
    convert(markup, &ConvertOptions::new("ansi")).expect("conversion to succeed")
}

#[test]
fn test_bold_uses_sgr_bold() {
    assert_eq!(
        to_ansi("Hello **bold world**!"),
        "Hello \x1b[1mbold world\x1b[22m!\n"
    );
}

#[test]
fn test_preformatted_and_paragraph() {
    assert_eq!(
        to_ansi("```\nls -la\n```\nDone _now_"),
        "\x1b[7mls -la\x1b[27m\n\nDone \x1b[3mnow\x1b[23m\n"
    );
}

#[test]
fn test_errors_do_not_depend_on_format() {
    let err = convert("**_X_**", &ConvertOptions::new("ansi")).unwrap_err();
    assert!(matches!(err, FormatError::Markup(_)));
    assert_eq!(err.to_string(), "Nested tag was found");
}
