//! Property tests for the HTML conversion

use mdlite_babel::{convert, ConvertOptions, FormatError, MarkupError};
use proptest::prelude::*;

fn html(markup: &str) -> Result<String, FormatError> {
    convert(markup, &ConvertOptions::new("html"))
}

fn delimiter() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("**"), Just("_"), Just("`")]
}

proptest! {
    #[test]
    fn plain_text_is_wrapped_unchanged(text in "[a-zA-Z0-9 ,.!?()-]{0,60}") {
        prop_assert_eq!(html(&text).unwrap(), format!("<p>{text}\n</p>"));
    }

    #[test]
    fn bold_wraps_its_content(
        before in "([a-zA-Z]{1,8} )?",
        inner in "[a-zA-Z0-9]([a-zA-Z0-9 ]{0,20}[a-zA-Z0-9])?",
        after in "( [a-zA-Z]{1,8})?[.!?]?",
    ) {
        let markup = format!("{before}**{inner}**{after}");
        prop_assert_eq!(html(&markup).unwrap(), format!("<p>{before}<b>{inner}</b>{after}\n</p>"));
    }

    #[test]
    fn space_adjacent_delimiters_stay_literal(
        delim in delimiter(),
        words in "[a-z]{1,8}( [a-z]{1,8}){0,3}",
    ) {
        let markup = format!("{delim} {words} {delim}");
        prop_assert_eq!(html(&markup).unwrap(), format!("<p>{markup}\n</p>"));
    }

    #[test]
    fn snake_case_never_italicizes(word in "[a-z]{1,8}_[a-z0-9]{1,8}(_[a-z]{1,8})?") {
        let output = html(&word).unwrap();
        prop_assert!(!output.contains("<i>"));
    }

    #[test]
    fn unclosed_delimiter_always_fails(
        before in "([a-z]{1,8} )?",
        delim in delimiter(),
        word in "[a-z]{1,8}( [a-z]{1,8})?",
    ) {
        let markup = format!("{before}{delim}{word}");
        let is_unclosed = matches!(html(&markup), Err(FormatError::Markup(MarkupError::Unclosed { .. })));
        prop_assert!(is_unclosed);
    }

    #[test]
    fn two_different_openers_always_nest(
        (outer, inner) in (delimiter(), delimiter()).prop_filter("distinct kinds", |(a, b)| a != b),
        word in "[a-zA-Z]{1,8}",
    ) {
        let markup = format!("{outer}{inner}{word}{inner}{outer}");
        let is_nested = matches!(html(&markup), Err(FormatError::Markup(MarkupError::Nested { .. })));
        prop_assert!(is_nested);
    }

    #[test]
    fn preformatted_content_is_verbatim(
        lines in prop::collection::vec("[a-zA-Z*_` ]{0,20}", 1..5)
            .prop_filter("no fence lines", |lines| lines.iter().all(|l| l != "```")),
    ) {
        let content = lines.join("\n");
        let markup = format!("```\n{content}\n```");
        prop_assert_eq!(html(&markup).unwrap(), format!("<pre>\n{content}\n</pre>"));
    }
}
